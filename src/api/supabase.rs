// Supabase (PostgREST) REST API client
// Read-only: the bot never writes ladder data back

use std::collections::HashSet;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::member::{Cell, Member, MemberBadgeRow};

const MEMBER_COLUMNS: &str = "id,full_name,discord_id,cell_id,success_ladder_score,updated_at";

/// Rows fetched per request when listing members
const PAGE_SIZE: usize = 1000;

/// Supabase REST API client
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(client: Client, project_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    /// Build a table URL from PostgREST query pairs
    fn table_url(&self, table: &str, query: &[(&str, String)]) -> String {
        let params: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();

        if params.is_empty() {
            format!("{}/{}", self.base_url, table)
        } else {
            format!("{}/{}?{}", self.base_url, table, params.join("&"))
        }
    }

    /// GET rows from a table
    async fn select<T: DeserializeOwned>(&self, table: &str, query: &[(&str, String)]) -> Result<Vec<T>> {
        let url = self.table_url(table, query);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            debug!("Supabase error on {}: {}", table, body);
            return Err(anyhow!("Supabase error: {}", status));
        }

        Ok(response.json().await?)
    }

    /// Member linked to a Discord account
    pub async fn get_member_by_discord(&self, discord_id: &str) -> Result<Option<Member>> {
        let rows: Vec<Member> = self
            .select(
                "members",
                &[
                    ("select", MEMBER_COLUMNS.to_string()),
                    ("discord_id", eq(discord_id)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Member by primary key
    pub async fn get_member(&self, member_id: &str) -> Result<Option<Member>> {
        let rows: Vec<Member> = self
            .select(
                "members",
                &[
                    ("select", MEMBER_COLUMNS.to_string()),
                    ("id", eq(member_id)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    /// All members, optionally of one cell
    /// Handles pagination to fetch every row
    pub async fn get_members(&self, cell_id: Option<&str>) -> Result<Vec<Member>> {
        let mut all = Vec::new();
        let mut offset = 0;

        loop {
            let mut query = vec![
                ("select", MEMBER_COLUMNS.to_string()),
                ("order", "id.asc".to_string()),
                ("limit", PAGE_SIZE.to_string()),
                ("offset", offset.to_string()),
            ];
            if let Some(cell) = cell_id {
                query.push(("cell_id", eq(cell)));
            }

            let page: Vec<Member> = self.select("members", &query).await?;
            let fetched = page.len();
            all.extend(page);

            if fetched < PAGE_SIZE {
                break;
            }
            offset += fetched;
        }

        debug!("Fetched {} members", all.len());
        Ok(all)
    }

    /// Ids of the badges a member has unlocked
    pub async fn get_unlocked_badges(&self, member_id: &str) -> Result<HashSet<String>> {
        let rows: Vec<MemberBadgeRow> = self
            .select(
                "member_badges",
                &[
                    ("select", "badge_id".to_string()),
                    ("member_id", eq(member_id)),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(|r| r.badge_id).collect())
    }

    /// Cell by name, case-insensitive
    pub async fn find_cell(&self, name: &str) -> Result<Option<Cell>> {
        let rows: Vec<Cell> = self
            .select(
                "cells",
                &[
                    ("select", "id,name".to_string()),
                    ("name", format!("ilike.{}", escape_like(name.trim()))),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }
}

/// PostgREST equality filter
fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

/// Escape LIKE wildcards so a name matches literally
fn escape_like(value: &str) -> String {
    value.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}
