mod branch;
mod company;
mod ingredient;
mod menu_item;
mod order;
mod support_ticket;
mod table;
mod user;
