// ── Per-entity list columns ──
//
// One hand-written comparator per entity, switched on the column ids
// the table views use. Columns a comparator doesn't implement fall
// through to Equal and keep the incoming order.

use std::cmp::Ordering;

use super::{ListColumns, SortSpec};
use crate::model::{
    Card, Catalog, CiteAction, CiteRole, DataField, DataOption, Inject, InjectType, Invitation,
    Move, Msel, Permission, PlayerApplication, ScenarioEvent, Team, Unit,
};

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn contains_opt(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(needle))
}

impl ListColumns for Msel {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => cmp_ci(&self.name, &other.name),
            "status" => self.status.to_string().cmp(&other.status.to_string()),
            "startTime" => self.start_time.cmp(&other.start_time),
            "dateCreated" => self.date_created.cmp(&other.date_created),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || contains_opt(self.description.as_deref(), needle)
    }
}

impl ListColumns for ScenarioEvent {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("rowIndex")
    }

    // The event table also offers a "status" column; it has never had a
    // comparator branch, so sorting by it leaves the order unchanged.
    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "rowIndex" => self.row_index.cmp(&other.row_index),
            "deltaSeconds" => self.delta_seconds.cmp(&other.delta_seconds),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.row_index.to_string().contains(needle)
            || self.status.to_string().to_lowercase().contains(needle)
    }
}

impl ListColumns for DataField {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("displayOrder")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "displayOrder" => self.display_order.cmp(&other.display_order),
            "name" => cmp_ci(&self.name, &other.name),
            "dataType" => self.data_type.to_string().cmp(&other.data_type.to_string()),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl ListColumns for DataOption {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("displayOrder")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "displayOrder" => self.display_order.cmp(&other.display_order),
            "optionName" => cmp_ci(&self.option_name, &other.option_name),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.option_name.to_lowercase().contains(needle)
            || self.option_value.to_lowercase().contains(needle)
    }
}

impl ListColumns for Team {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => self.name.cmp(&other.name),
            "shortName" => self.short_name.cmp(&other.short_name),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.short_name.to_lowercase().contains(needle)
            || contains_opt(self.email.as_deref(), needle)
    }
}

impl ListColumns for Unit {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => self.name.cmp(&other.name),
            "shortName" => self.short_name.cmp(&other.short_name),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.short_name.to_lowercase().contains(needle)
    }
}

impl ListColumns for Catalog {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    // The catalog table also labels an "injectType" column; it only
    // ever sorted by name.
    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => cmp_ci(&self.name, &other.name),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || contains_opt(self.description.as_deref(), needle)
    }
}

impl ListColumns for Inject {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => cmp_ci(&self.name, &other.name),
            "dateCreated" => self.date_created.cmp(&other.date_created),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || contains_opt(self.description.as_deref(), needle)
    }
}

impl ListColumns for InjectType {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => cmp_ci(&self.name, &other.name),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl ListColumns for Move {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("moveNumber")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "moveNumber" => self.move_number.cmp(&other.move_number),
            "deltaSeconds" => self.delta_seconds.cmp(&other.delta_seconds),
            "situationTime" => self.situation_time.cmp(&other.situation_time),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.move_number.to_string().contains(needle)
            || contains_opt(self.description.as_deref(), needle)
    }
}

impl ListColumns for Card {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => cmp_ci(&self.name, &other.name),
            // "move" sorts descending even under the ascending label.
            "move" => other.move_number.cmp(&self.move_number),
            "inject" => self.inject_number.cmp(&other.inject_number),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || contains_opt(self.description.as_deref(), needle)
    }
}

impl ListColumns for CiteRole {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => cmp_ci(&self.name, &other.name),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl ListColumns for CiteAction {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("moveNumber")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "moveNumber" => self.move_number.cmp(&other.move_number),
            "actionNumber" => self.action_number.cmp(&other.action_number),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        contains_opt(self.description.as_deref(), needle)
    }
}

impl ListColumns for Invitation {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("emailDomain")
    }

    // The invitation table also labels an "expiration" column with no
    // comparator branch.
    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "emailDomain" => self.email_domain.cmp(&other.email_domain),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        contains_opt(self.email_domain.as_deref(), needle)
    }
}

impl ListColumns for PlayerApplication {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => cmp_ci(&self.name, &other.name),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || contains_opt(self.url.as_deref(), needle)
    }
}

impl ListColumns for Permission {
    fn default_sort() -> SortSpec {
        SortSpec::ascending("name")
    }

    fn compare_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "name" => self.name.cmp(&other.name),
            _ => Ordering::Equal,
        }
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::view::{ListParams, SortSpec, visible};
    use std::sync::Arc;
    use uuid::Uuid;

    fn card(n: u128, name: &str, move_number: i32) -> Arc<Card> {
        Arc::new(Card {
            id: Uuid::from_u128(n),
            msel_id: Uuid::nil(),
            name: name.into(),
            description: None,
            move_number,
            inject_number: 1,
        })
    }

    #[test]
    fn card_move_column_sorts_inverted() {
        let cards = vec![card(1, "a", 1), card(2, "b", 3), card(3, "c", 2)];
        let params = ListParams {
            sort: Some(SortSpec::ascending("move")),
            ..ListParams::default()
        };

        let rows = visible(&cards, &params);
        let moves: Vec<i32> = rows.iter().map(|c| c.move_number).collect();
        assert_eq!(moves, vec![3, 2, 1]);
    }

    #[test]
    fn scenario_event_status_column_is_inert() {
        let events: Vec<Arc<ScenarioEvent>> = [(1u128, 2), (2, 1)]
            .iter()
            .map(|&(n, row)| {
                Arc::new(ScenarioEvent {
                    id: Uuid::from_u128(n),
                    msel_id: Uuid::nil(),
                    row_index: row,
                    row_metadata: None,
                    delta_seconds: 0,
                    status: crate::model::MselStatus::Pending,
                    is_hidden: false,
                    created_by: None,
                    date_created: None,
                    date_modified: None,
                })
            })
            .collect();

        let params = ListParams {
            sort: Some(SortSpec::ascending("status")),
            ..ListParams::default()
        };

        let rows = visible(&events, &params);
        let indices: Vec<i32> = rows.iter().map(|e| e.row_index).collect();
        // Order unchanged: the status column has no comparator branch.
        assert_eq!(indices, vec![2, 1]);
    }

    #[test]
    fn msel_name_sort_is_case_insensitive() {
        let msels: Vec<Arc<Msel>> = ["zulu", "Alpha"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Arc::new(Msel {
                    id: Uuid::from_u128(i as u128 + 1),
                    name: (*name).into(),
                    description: None,
                    status: crate::model::MselStatus::Pending,
                    start_time: None,
                    header_row_metadata: None,
                    is_template: false,
                    created_by: None,
                    date_created: None,
                    date_modified: None,
                })
            })
            .collect();

        let rows = visible(&msels, &ListParams::default());
        let names: Vec<&str> = rows.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "zulu"]);
    }
}
