mod company;
pub use self::company::Company;

mod snapshot;
pub use self::snapshot::{CompanyStats, FrequencyTable, NormalizedCompany};

mod meta;
pub use self::meta::ApiMeta;

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
