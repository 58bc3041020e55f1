//! Integration tests for sharelink-graph
//!
//! Uses wiremock to simulate the Microsoft Graph API and verifies
//! end-to-end behavior of the GraphClient, the share provider, and the
//! annotation pipeline running on top of it.

mod common;

mod test_annotate;
mod test_shares;
mod test_user_info;
