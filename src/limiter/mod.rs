mod pool;
mod replenisher;

pub use pool::PermitPool;
pub use replenisher::Replenisher;
