//! Application Layer
//!
//! The application layer drives the domain through the ports.
//! It defines:
//!
//! - **Ports**: Interfaces to the backend services and the session store
//! - **Forms**: Request building with edit-time clamping and validation
//! - **Render**: Result sets laid out as display tables
//! - **Use Cases**: The crawling page, the document workspace, chat

pub mod forms;
pub mod ports;
pub mod render;
pub mod use_cases;

pub use forms::*;
pub use ports::*;
pub use render::*;
pub use use_cases::*;
