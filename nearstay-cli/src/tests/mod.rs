//! Unit tests for the Nearstay CLI.
