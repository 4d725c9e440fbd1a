//! Common test utilities
