//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across page types
//! (news index, article detail). The `article` component is the presentation
//! layer for rendered markdown blocks.

pub mod article;
pub mod card;
pub mod layout;
pub mod nav;
