/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Environment-driven client configuration
pub mod config;
/// Per-client request configuration and its factory
pub mod configuration;
/// Service interfaces implemented by the resource clients
pub mod interfaces;
/// The credential-scoped client registry
pub mod registry;
/// Resource clients, one per API group
pub mod services;
