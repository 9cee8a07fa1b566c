use crate::server::{data::support_ticket::SupportTicketRepository, model::support::TicketStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
