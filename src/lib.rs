// Library root
// -----------
// The binary (`main.rs`) wires these modules together:
// - `config`: startup read of `AISHE_URL` and the fixed request timeout.
// - `api`: wire types and the blocking HTTP client for the ask endpoint.
// - `ui`: argument joining, usage text and answer formatting.
pub mod api;
pub mod config;
pub mod ui;
