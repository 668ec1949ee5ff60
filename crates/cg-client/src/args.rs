use cg_client::ListQuery;
use cg_core::Role;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

/// Filters shared by list commands
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<u32>,
    /// Page size
    #[arg(long)]
    pub per_page: Option<u32>,
    /// Status filter (e.g., pending, approved)
    #[arg(long)]
    pub status: Option<String>,
    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,
    /// Range start (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    /// Range end (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
}

impl From<ListArgs> for ListQuery {
    fn from(args: ListArgs) -> Self {
        ListQuery {
            page: args.page,
            per_page: args.per_page,
            status: args.status,
            search: args.search,
            start_date: args.start_date,
            end_date: args.end_date,
        }
    }
}

/// Date range for analytics
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Range start (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    /// Range end (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
}

impl From<RangeArgs> for ListQuery {
    fn from(args: RangeArgs) -> Self {
        ListQuery::new().date_range(args.start_date, args.end_date)
    }
}

/// Inbox owner
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxRole {
    Student,
    Counselor,
    Admin,
}

impl From<InboxRole> for Role {
    fn from(role: InboxRole) -> Self {
        match role {
            InboxRole::Student => Role::Student,
            InboxRole::Counselor => Role::Counselor,
            InboxRole::Admin => Role::Admin,
        }
    }
}
