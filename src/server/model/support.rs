//! Support ticket priority and status.

use std::str::FromStr;

use crate::{
    model::support::{CreateTicketDto, SupportTicketDto, UpdateTicketDto},
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl FromStr for TicketPriority {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(AppError::BadRequest(format!("Invalid priority: {}", value))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(AppError::BadRequest(format!("Invalid status: {}", value))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTicketParams {
    pub subject: String,
    pub description: String,
    pub priority: TicketPriority,
}

impl CreateTicketParams {
    pub fn from_dto(dto: CreateTicketDto) -> Result<Self, AppError> {
        let subject = dto.subject.map(|s| s.trim().to_string()).unwrap_or_default();
        let description = dto
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_default();
        if subject.is_empty() || description.is_empty() {
            return Err(AppError::BadRequest(
                "Subject and description are required".to_string(),
            ));
        }

        let priority = match dto.priority.as_deref() {
            None | Some("") => TicketPriority::default(),
            Some(p) => p.parse()?,
        };

        Ok(Self {
            subject,
            description,
            priority,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTicketParams {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
}

impl UpdateTicketParams {
    pub fn from_dto(dto: UpdateTicketDto) -> Result<Self, AppError> {
        Ok(Self {
            subject: dto.subject.filter(|s| !s.trim().is_empty()),
            description: dto.description.filter(|d| !d.trim().is_empty()),
            priority: dto.priority.as_deref().map(str::parse).transpose()?,
            status: dto.status.as_deref().map(str::parse).transpose()?,
        })
    }
}

impl From<entity::support_ticket::Model> for SupportTicketDto {
    fn from(ticket: entity::support_ticket::Model) -> Self {
        Self {
            id: ticket.id,
            company_id: ticket.company_id,
            created_by: ticket.created_by,
            subject: ticket.subject,
            description: ticket.description,
            priority: ticket.priority,
            status: ticket.status,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}
