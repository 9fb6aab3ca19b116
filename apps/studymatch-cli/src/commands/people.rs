//! Everyone on StudyMatch, by group, with their average rating

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::{format_rating, Group, User};
use crate::output::truncate;
use clap::Args;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Args, Debug)]
pub struct PeopleArgs {
    /// Only show members of this group
    #[arg(long)]
    pub group: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One row of the people listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRow {
    pub id: i64,
    pub name: String,
    pub netid: String,
    pub group: Option<String>,
    pub rating: String,
}

/// Join users to group names, ordered by group then name
pub fn people_rows(users: &[User], groups: &[Group], only_group: Option<i64>) -> Vec<PersonRow> {
    let names: HashMap<i64, &str> = groups.iter().map(|g| (g.id, g.name.as_str())).collect();

    let mut rows: Vec<PersonRow> = users
        .iter()
        .filter(|u| only_group.map_or(true, |g| u.group_id == Some(g)))
        .map(|u| PersonRow {
            id: u.id,
            name: u.name.clone(),
            netid: u.netid.clone(),
            group: u
                .group_id
                .and_then(|id| names.get(&id).map(|n| n.to_string())),
            rating: format_rating(&u.rates),
        })
        .collect();

    // Ungrouped students sort last
    rows.sort_by(|a, b| {
        (a.group.is_none(), &a.group, &a.name).cmp(&(b.group.is_none(), &b.group, &b.name))
    });
    rows
}

/// Execute the people command
pub async fn execute(args: PeopleArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;
    let (users, groups) = tokio::try_join!(client.list_users(), client.list_groups())?;
    let rows = people_rows(&users, &groups, args.group);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No people found.");
    } else {
        println!(
            "{:<6} {:<24} {:<12} {:<24} {:<6}",
            "ID", "NAME", "NETID", "GROUP", "RATING"
        );
        println!("{}", "-".repeat(76));
        for row in &rows {
            println!(
                "{:<6} {:<24} {:<12} {:<24} {:<6}",
                row.id,
                truncate(&row.name, 22),
                truncate(&row.netid, 10),
                truncate(row.group.as_deref().unwrap_or("None"), 22),
                row.rating
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rate, Stars};

    fn user(id: i64, name: &str, group_id: Option<i64>, stars: &[i64]) -> User {
        User {
            id,
            name: name.to_string(),
            netid: format!("n{id}"),
            group_id,
            rates: stars
                .iter()
                .enumerate()
                .map(|(i, s)| Rate {
                    id: i as i64,
                    stars: Stars::new(*s).unwrap(),
                    users: vec![],
                    groups: vec![],
                })
                .collect(),
        }
    }

    fn group(id: i64, name: &str) -> Group {
        Group {
            id,
            name: name.to_string(),
            users: vec![],
            tasks: vec![],
            rates: vec![],
        }
    }

    #[test]
    fn test_rows_sorted_with_ungrouped_last() {
        let users = vec![
            user(1, "Zed", None, &[]),
            user(2, "Bob", Some(2), &[5, 7]),
            user(3, "Amy", Some(1), &[9]),
        ];
        let groups = vec![group(1, "Algorithms"), group(2, "Biology")];

        let rows = people_rows(&users, &groups, None);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Amy", "Bob", "Zed"]);
        assert_eq!(rows[1].rating, "6.00");
        assert_eq!(rows[2].rating, "N/A");
        assert_eq!(rows[2].group, None);
    }

    #[test]
    fn test_rows_filtered_by_group() {
        let users = vec![user(1, "A", Some(1), &[]), user(2, "B", Some(2), &[])];
        let rows = people_rows(&users, &[group(1, "G1"), group(2, "G2")], Some(2));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].group.as_deref(), Some("G2"));
    }

    #[test]
    fn test_unknown_group_id_shows_none() {
        let rows = people_rows(&[user(1, "A", Some(99), &[])], &[], None);
        assert_eq!(rows[0].group, None);
    }
}
