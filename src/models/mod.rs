// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod admin;
pub mod club;
pub mod member;
pub mod news;
pub mod slider;

pub use admin::{Admin, AdminPublic};
pub use club::ClubSettings;
pub use member::Member;
pub use news::NewsItem;
pub use slider::Slide;
