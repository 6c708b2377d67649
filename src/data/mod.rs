pub mod declination;

pub use declination::{
    load_declination_table, lookup_or_default, DeclinationSource, FixedDeclination,
};
