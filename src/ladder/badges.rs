// Badge catalog
// Display metadata only. Whether a member has unlocked a badge is decided
// upstream and arrives here as a set of badge ids.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

use super::LadderError;

/// Badge grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeCategory {
    Frequency,
    Leadership,
    Learning,
    Service,
}

impl BadgeCategory {
    /// Fixed display order of the catalog
    pub const ALL: [BadgeCategory; 4] = [
        BadgeCategory::Frequency,
        BadgeCategory::Leadership,
        BadgeCategory::Learning,
        BadgeCategory::Service,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BadgeCategory::Frequency => "Frequência",
            BadgeCategory::Leadership => "Liderança",
            BadgeCategory::Learning => "Aprendizado",
            BadgeCategory::Service => "Serviço",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            BadgeCategory::Frequency => "📅",
            BadgeCategory::Leadership => "👑",
            BadgeCategory::Learning => "📖",
            BadgeCategory::Service => "🤝",
        }
    }
}

impl FromStr for BadgeCategory {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frequency" | "frequencia" | "frequência" => Ok(BadgeCategory::Frequency),
            "leadership" | "lideranca" | "liderança" => Ok(BadgeCategory::Leadership),
            "learning" | "aprendizado" => Ok(BadgeCategory::Learning),
            "service" | "servico" | "serviço" => Ok(BadgeCategory::Service),
            _ => Err(LadderError::UnknownCategory(s.to_string())),
        }
    }
}

/// Badge definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: BadgeCategory,
    /// Human-readable unlock condition, never evaluated here
    pub criteria: &'static str,
}

const FREQUENCY_BADGES: &[Badge] = &[
    Badge {
        id: "fiel_na_celula",
        name: "Fiel na Célula",
        description: "Presença constante nas reuniões da célula",
        icon: "🔥",
        category: BadgeCategory::Frequency,
        criteria: "Participar de 4 reuniões de célula seguidas",
    },
    Badge {
        id: "adorador_assiduo",
        name: "Adorador Assíduo",
        description: "Presença regular nos cultos de celebração",
        icon: "🙌",
        category: BadgeCategory::Frequency,
        criteria: "Participar de 12 cultos em um trimestre",
    },
    Badge {
        id: "ano_de_fidelidade",
        name: "Ano de Fidelidade",
        description: "Um ano inteiro caminhando com a célula",
        icon: "🗓️",
        category: BadgeCategory::Frequency,
        criteria: "Participar de 52 semanas de célula sem faltas consecutivas",
    },
];

const LEADERSHIP_BADGES: &[Badge] = &[
    Badge {
        id: "primeiro_discipulo",
        name: "Primeiro Discípulo",
        description: "Começou a discipular alguém",
        icon: "🌱",
        category: BadgeCategory::Leadership,
        criteria: "Ter o primeiro discípulo registrado",
    },
    Badge {
        id: "multiplicador",
        name: "Multiplicador",
        description: "Multiplicou a própria célula",
        icon: "🌳",
        category: BadgeCategory::Leadership,
        criteria: "Concluir uma multiplicação de célula",
    },
    Badge {
        id: "lider_de_lideres",
        name: "Líder de Líderes",
        description: "Formou novos líderes de célula",
        icon: "👑",
        category: BadgeCategory::Leadership,
        criteria: "Ter 3 discípulos liderando células",
    },
];

const LEARNING_BADGES: &[Badge] = &[
    Badge {
        id: "encontro_com_deus",
        name: "Encontro com Deus",
        description: "Participou do retiro Encontro com Deus",
        icon: "✨",
        category: BadgeCategory::Learning,
        criteria: "Concluir o Encontro com Deus",
    },
    Badge {
        id: "escola_de_lideres",
        name: "Escola de Líderes",
        description: "Formado na escola de líderes",
        icon: "🎓",
        category: BadgeCategory::Learning,
        criteria: "Concluir todos os módulos da Escola de Líderes",
    },
    Badge {
        id: "leitor_da_palavra",
        name: "Leitor da Palavra",
        description: "Leu a Bíblia inteira",
        icon: "📖",
        category: BadgeCategory::Learning,
        criteria: "Registrar a leitura completa da Bíblia",
    },
];

const SERVICE_BADGES: &[Badge] = &[
    Badge {
        id: "servo_fiel",
        name: "Servo Fiel",
        description: "Serve em um ministério da igreja",
        icon: "🤝",
        category: BadgeCategory::Service,
        criteria: "Servir em um ministério por 3 meses",
    },
    Badge {
        id: "anfitriao",
        name: "Anfitrião",
        description: "Abriu a casa para a célula",
        icon: "🏠",
        category: BadgeCategory::Service,
        criteria: "Hospedar 10 reuniões de célula",
    },
    Badge {
        id: "ganhador_de_almas",
        name: "Ganhador de Almas",
        description: "Trouxe visitantes que se tornaram membros",
        icon: "🕊️",
        category: BadgeCategory::Service,
        criteria: "Levar 5 visitantes que se tornaram membros",
    },
];

/// Badges declared under `category`, in declaration order
pub fn get_category_badges(category: BadgeCategory) -> &'static [Badge] {
    match category {
        BadgeCategory::Frequency => FREQUENCY_BADGES,
        BadgeCategory::Leadership => LEADERSHIP_BADGES,
        BadgeCategory::Learning => LEARNING_BADGES,
        BadgeCategory::Service => SERVICE_BADGES,
    }
}

/// Whole catalog, categories in `BadgeCategory::ALL` order
pub fn get_all_badges() -> Vec<&'static Badge> {
    BadgeCategory::ALL
        .iter()
        .flat_map(|c| get_category_badges(*c).iter())
        .collect()
}

/// Look up a badge by id
pub fn get_badge(id: &str) -> Option<&'static Badge> {
    BadgeCategory::ALL
        .iter()
        .flat_map(|c| get_category_badges(*c).iter())
        .find(|b| b.id == id)
}

/// Check that badge ids are unique across categories
pub fn validate_catalog() -> Result<(), LadderError> {
    let mut seen = HashSet::new();
    for badge in get_all_badges() {
        if !seen.insert(badge.id) {
            return Err(LadderError::DuplicateBadge(badge.id));
        }
    }
    Ok(())
}

/// A catalog badge paired with its externally decided unlock state
#[derive(Debug, Clone)]
pub struct BadgeSlot {
    pub badge: &'static Badge,
    pub unlocked: bool,
}

/// One category of a member's badge board
#[derive(Debug, Clone)]
pub struct CategoryBoard {
    pub category: BadgeCategory,
    pub slots: Vec<BadgeSlot>,
}

impl CategoryBoard {
    pub fn unlocked_count(&self) -> usize {
        self.slots.iter().filter(|s| s.unlocked).count()
    }
}

/// Badge board for a member
#[derive(Debug, Clone)]
pub struct BadgeBoard {
    pub categories: Vec<CategoryBoard>,
    /// Unlocked ids that are not in the catalog
    pub unknown_ids: Vec<String>,
}

impl BadgeBoard {
    pub fn unlocked_count(&self) -> usize {
        self.categories.iter().map(|c| c.unlocked_count()).sum()
    }

    pub fn total_count(&self) -> usize {
        self.categories.iter().map(|c| c.slots.len()).sum()
    }

    pub fn category(&self, category: BadgeCategory) -> Option<&CategoryBoard> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Pair every catalog badge with whether its id is in `unlocked`
pub fn badge_board(unlocked: &HashSet<String>) -> BadgeBoard {
    let categories = BadgeCategory::ALL
        .iter()
        .map(|&category| CategoryBoard {
            category,
            slots: get_category_badges(category)
                .iter()
                .map(|badge| BadgeSlot {
                    badge,
                    unlocked: unlocked.contains(badge.id),
                })
                .collect(),
        })
        .collect();

    let mut unknown_ids: Vec<String> = unlocked
        .iter()
        .filter(|id| get_badge(id).is_none())
        .cloned()
        .collect();
    unknown_ids.sort();

    BadgeBoard {
        categories,
        unknown_ids,
    }
}
