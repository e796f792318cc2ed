// Application Layer - Selection, composition and the operation table

pub mod composer;
pub mod operation;
pub mod params;
pub mod responses;
pub mod selector;
pub mod service;

// Re-exports
pub use composer::DailyWisdom;
pub use operation::{
    find_by_rpc_method, DefaultValue, Operation, OperationDescriptor, ParamKind, ParamSpec,
    OPERATIONS,
};
pub use params::{BedtimeParams, QuoteParams, SearchParams, WisdomParams};
pub use responses::{
    BedtimeResponse, CategoriesResponse, QuoteResponse, SearchResponse, TipResponse,
    WisdomResponse,
};
pub use service::SleepService;
