//! Detail selection from the routed movie id

use crate::domain::movie::{MovieList, MovieRecord};

/// Resolves the movie shown in the detail overlay.
///
/// Matches the routed identifier against the string form of each id, so
/// `"027205"` does not resolve to movie `27205`.
pub fn resolve<'a>(routed_id: Option<&str>, list: Option<&'a MovieList>) -> Option<&'a MovieRecord> {
    let id = routed_id.filter(|id| !id.is_empty())?;
    list?.find_by_id_str(id)
}
