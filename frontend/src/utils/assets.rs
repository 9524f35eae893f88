use crate::api::AssetAllocation;

/// Finds the allocation whose name matches `name`, ignoring surrounding
/// whitespace and case. Blank input never matches.
pub fn resolve_asset<'a>(
    name: &str,
    allocations: &'a [AssetAllocation],
) -> Option<&'a AssetAllocation> {
    let wanted = name.trim();
    if wanted.is_empty() {
        return None;
    }
    let wanted = wanted.to_lowercase();
    allocations
        .iter()
        .find(|allocation| allocation.asset_name.trim().to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecordId;

    fn allocation(id: i64, name: &str) -> AssetAllocation {
        AssetAllocation {
            asset_id: RecordId::Number(id),
            asset_name: name.to_string(),
            category_id: Some(RecordId::Number(3)),
            user_id: Some(RecordId::from("42")),
        }
    }

    #[test]
    fn matches_trimmed_name_case_insensitively() {
        let allocations = vec![allocation(7, "Laptop-1"), allocation(8, "Monitor")];
        let hit = resolve_asset("  laptop-1 ", &allocations).map(|a| a.asset_id.clone());
        assert_eq!(hit, Some(RecordId::Number(7)));
    }

    #[test]
    fn partial_or_blank_names_do_not_match() {
        let allocations = vec![allocation(7, "Laptop-1")];
        assert!(resolve_asset("Laptop", &allocations).is_none());
        assert!(resolve_asset("   ", &allocations).is_none());
        assert!(resolve_asset("Laptop-1", &[]).is_none());
    }
}
