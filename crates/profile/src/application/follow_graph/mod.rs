mod follow_graph_port;
mod follow_service;

pub use follow_graph_port::FollowGraph;
pub use follow_service::FollowService;
