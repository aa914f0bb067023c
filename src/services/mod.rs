//! Haven API service implementations.
//!
//! Most resources come in two flavours: a singular service path
//! (`bulletin`, `feeditem`, `principal`) with plain CRUD, and a pluralised
//! path (`bulletins`, `feeditems`, `principals`) with the calls that apply
//! business rules for the current account. Prefer the pluralised calls
//! where both exist.

mod accounts;
mod auth;
mod bulletins;
mod conversations;
mod factions;
mod feed;
mod forms;
mod groups;
mod principals;
mod seats;
mod staff;
mod terms;

pub use accounts::*;
pub use auth::*;
pub use bulletins::*;
pub use conversations::*;
pub use factions::*;
pub use feed::*;
pub use forms::*;
pub use groups::*;
pub use principals::*;
pub use seats::*;
pub use staff::*;
pub use terms::*;
