//! Pure view transforms over the in-memory job list — search, sorting, and
//! pagination. Display-only: none of this is ever written to the store.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::models::job::JobApplication;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Employer,
    Position,
    Location,
    Status,
    AppliedDate,
    Relevance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Stable, deterministic sort. String columns compare case-insensitively
/// with the raw string as tiebreak; the relevance column compares
/// numerically with unanalyzed records ordered last in either direction.
pub fn sort_jobs(jobs: &mut [JobApplication], column: SortColumn, direction: SortDirection) {
    jobs.sort_by(|a, b| match column {
        SortColumn::Relevance => cmp_relevance(a.relevance, b.relevance, direction),
        _ => {
            let ordering = cmp_str(column_str(a, column), column_str(b, column));
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    });
}

fn column_str(job: &JobApplication, column: SortColumn) -> &str {
    match column {
        SortColumn::Employer => &job.employer,
        SortColumn::Position => &job.position,
        SortColumn::Location => &job.location,
        SortColumn::Status => job.status.as_str(),
        SortColumn::AppliedDate => &job.applied_date,
        SortColumn::Relevance => "",
    }
}

fn cmp_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn cmp_relevance(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ordering = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
        // Unanalyzed records sink to the end regardless of direction.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive substring match over employer, position, location, and
/// keywords. An empty query matches everything.
pub fn search_jobs(jobs: &[JobApplication], query: &str) -> Vec<JobApplication> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return jobs.to_vec();
    }
    jobs.iter()
        .filter(|job| matches_query(job, &needle))
        .cloned()
        .collect()
}

fn matches_query(job: &JobApplication, needle: &str) -> bool {
    job.employer.to_lowercase().contains(needle)
        || job.position.to_lowercase().contains(needle)
        || job.location.to_lowercase().contains(needle)
        || job
            .keywords
            .iter()
            .any(|keyword| keyword.to_lowercase().contains(needle))
}

/// Number of pages needed for `total` items at `per_page` each.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// The 1-based `page` of `items`. Out-of-range pages are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    if page == 0 || per_page == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + per_page).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Status;
    use uuid::Uuid;

    fn job(employer: &str, position: &str, relevance: Option<f64>) -> JobApplication {
        JobApplication {
            id: Some(Uuid::new_v4()),
            employer: employer.to_string(),
            position: position.to_string(),
            location: "Remote".to_string(),
            status: Status::Applied,
            relevance,
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_by_employer_is_case_insensitive() {
        let mut jobs = vec![
            job("zeta", "a", None),
            job("Alpha", "b", None),
            job("beta", "c", None),
        ];
        sort_jobs(&mut jobs, SortColumn::Employer, SortDirection::Asc);
        let order: Vec<_> = jobs.iter().map(|j| j.employer.as_str()).collect();
        assert_eq!(order, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_sort_desc_reverses_string_order() {
        let mut jobs = vec![job("Alpha", "a", None), job("beta", "b", None)];
        sort_jobs(&mut jobs, SortColumn::Employer, SortDirection::Desc);
        assert_eq!(jobs[0].employer, "beta");
    }

    #[test]
    fn test_sort_is_deterministic_across_repeats() {
        let mut first = vec![
            job("Acme", "Engineer", None),
            job("Acme", "Analyst", None),
            job("Beta", "Engineer", None),
        ];
        let mut second = first.clone();
        sort_jobs(&mut first, SortColumn::Employer, SortDirection::Asc);
        sort_jobs(&mut second, SortColumn::Employer, SortDirection::Asc);
        // And sorting an already-sorted list changes nothing.
        let mut third = first.clone();
        sort_jobs(&mut third, SortColumn::Employer, SortDirection::Asc);
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let a = job("Acme", "First", None);
        let b = job("Acme", "Second", None);
        let mut jobs = vec![a.clone(), b.clone()];
        sort_jobs(&mut jobs, SortColumn::Employer, SortDirection::Asc);
        assert_eq!(jobs[0].position, "First");
        assert_eq!(jobs[1].position, "Second");
    }

    #[test]
    fn test_relevance_sort_puts_none_last_both_directions() {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let mut jobs = vec![
                job("a", "a", None),
                job("b", "b", Some(0.3)),
                job("c", "c", Some(0.9)),
            ];
            sort_jobs(&mut jobs, SortColumn::Relevance, direction);
            assert!(jobs[2].relevance.is_none(), "direction {direction:?}");
        }
    }

    #[test]
    fn test_relevance_sort_orders_scores() {
        let mut jobs = vec![job("a", "a", Some(0.9)), job("b", "b", Some(0.3))];
        sort_jobs(&mut jobs, SortColumn::Relevance, SortDirection::Asc);
        assert_eq!(jobs[0].relevance, Some(0.3));
        sort_jobs(&mut jobs, SortColumn::Relevance, SortDirection::Desc);
        assert_eq!(jobs[0].relevance, Some(0.9));
    }

    #[test]
    fn test_search_matches_keywords() {
        let mut target = job("Acme", "Engineer", None);
        target.keywords = vec!["Kubernetes".to_string()];
        let jobs = vec![target, job("Beta", "Analyst", None)];

        let found = search_jobs(&jobs, "kubernetes");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].employer, "Acme");
    }

    #[test]
    fn test_search_matches_employer_and_position() {
        let jobs = vec![job("Acme Robotics", "Engineer", None), job("Beta", "Designer", None)];
        assert_eq!(search_jobs(&jobs, "robotics").len(), 1);
        assert_eq!(search_jobs(&jobs, "design").len(), 1);
        assert_eq!(search_jobs(&jobs, "nowhere").len(), 0);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let jobs = vec![job("a", "a", None), job("b", "b", None)];
        assert_eq!(search_jobs(&jobs, "  ").len(), 2);
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(9, 10), 1);
    }

    #[test]
    fn test_pages_concatenate_to_full_list() {
        let items: Vec<usize> = (0..23).collect();
        let per_page = 5;
        let mut combined = Vec::new();
        for page in 1..=page_count(items.len(), per_page) {
            combined.extend(paginate(&items, page, per_page));
        }
        assert_eq!(combined, items);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<usize> = (0..3).collect();
        assert!(paginate(&items, 2, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
    }
}
