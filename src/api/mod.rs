// External API clients
pub mod supabase;
