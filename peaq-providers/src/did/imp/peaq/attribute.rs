use crate::chain_storage::AttributeRecord;
use crate::did::model::DidAttribute;

/// Returns the attribute when the ledger holds an entry for it.
///
/// The validity window is reported, not enforced.
pub fn interpret(record: Option<AttributeRecord>) -> Option<DidAttribute> {
    let record = record.filter(|record| !record.is_storage_fallback)?;

    Some(DidAttribute {
        name: String::from_utf8_lossy(&record.name).into_owned(),
        value: record.value,
        validity: record.validity,
        created: record.created,
    })
}
