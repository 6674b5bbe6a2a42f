use crate::api::ScheduleEntry;
use indexmap::IndexMap;

/// Entries keyed by technician name.
///
/// Technicians appear in first-seen order and each technician's entries
/// keep their order from the source list; nothing is sorted by time.
pub type TechnicianGroups<'a> = IndexMap<&'a str, Vec<&'a ScheduleEntry>>;

pub fn group_by_technician(entries: &[ScheduleEntry]) -> TechnicianGroups<'_> {
    let mut groups: TechnicianGroups<'_> = IndexMap::new();
    for entry in entries {
        groups
            .entry(entry.technician_name.as_str())
            .or_default()
            .push(entry);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tech: &str, job_id: i64) -> ScheduleEntry {
        ScheduleEntry {
            technician_name: tech.to_string(),
            job_id,
            car_model: String::new(),
            service_type: String::new(),
            task_status: String::new(),
            scheduled_time: None,
            promised_delivery: None,
        }
    }

    #[test]
    fn first_seen_order_is_kept() {
        let entries = vec![entry("Bob", 1), entry("Alice", 2), entry("Bob", 3)];
        let groups = group_by_technician(&entries);

        let names: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(names, vec!["Bob", "Alice"]);

        let bob: Vec<i64> = groups["Bob"].iter().map(|e| e.job_id).collect();
        assert_eq!(bob, vec![1, 3]);
    }

    #[test]
    fn grouping_is_a_partition() {
        let entries = vec![
            entry("Bob", 1),
            entry("", 2),
            entry("Alice", 3),
            entry("Bob", 4),
            entry("", 5),
        ];
        let groups = group_by_technician(&entries);
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, entries.len());
        assert_eq!(groups[""].len(), 2);
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(group_by_technician(&[]).is_empty());
    }
}
