// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod exchange_rate_csv_datasource;
        pub(crate) mod worksheet_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod category_code_model;
        pub(crate) mod numeric_cell_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod rates_repository_impl;
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod catalog;
        pub(crate) mod chart_matrix;
        pub(crate) mod rate_table;
        pub(crate) mod record;
        pub(crate) mod selection;
    }
    pub(crate) mod logic {
        pub(crate) mod chart_builder;
        pub(crate) mod combinations;
        pub(crate) mod matcher;
        pub(crate) mod selection_cache;
    }
    pub(crate) mod repositories {
        pub(crate) mod rates_repository;
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod compare_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod chart_fmt;
    pub(crate) mod csv_printer;
    pub(crate) mod table_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::catalog::*;
        pub use crate::domain::entities::chart_matrix::*;
        pub use crate::domain::entities::rate_table::*;
        pub use crate::domain::entities::record::*;
        pub use crate::domain::entities::selection::*;
        pub use crate::domain::logic::chart_builder::BuildNote;
        pub use crate::domain::logic::selection_cache::*;
        pub use crate::domain::usecases::compare_usecase::Comparison;
        pub use crate::presentation::chart_fmt::*;
        pub use crate::presentation::table_fmt::*;
    }
}
