mod asset;
mod audit;
mod customer;
mod splitter;
mod task;
mod task_checklist;
mod user;
