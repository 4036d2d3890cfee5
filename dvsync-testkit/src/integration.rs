//! Integration tests for full sync and verify workflows.
//!
//! These tests exercise the complete operations against a temporary working
//! tree and an in-memory Dataverse, asserting on the exact API traffic each
//! run produces.
