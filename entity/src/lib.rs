pub mod pr_reviewer;
pub mod pull_request;
pub mod team;
pub mod team_member;
pub mod user;

pub use pull_request::PrStatus;

/*
 A user is a member of at most one team. A pull request records the author's
 team at creation time and keeps it for good, even if the author moves later.
 Reviewers are drawn from that recorded team.
 */
