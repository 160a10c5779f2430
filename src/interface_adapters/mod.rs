// Interface adapters: HTTP wire protocol, handlers and frame rendering.

pub mod handlers;
pub mod http;
pub mod protocol;
pub mod render;
pub mod routes;
pub mod state;
