/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Client-side filtering and ordering of fetched collections.
//!
//! A [`Query`] is a list of predicates combined with logical AND plus a sort
//! key. Applying it never mutates the input and always recomputes the view
//! from scratch, so applying the same query to its own output yields the
//! same list.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use connector::{Application, ApplicationStatus, EmploymentType, Job};
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use std::sync::LazyLock;

static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> =
    LazyLock::new(|| Collator::try_new(Default::default(), CollatorOptions::default()).ok());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    #[default]
    Latest,
    Oldest,
    Alphabetical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Location,
    Description,
    SeekerName,
    SeekerEmail,
}

pub trait Listable {
    type Category: PartialEq;

    fn field(&self, field: Field) -> Option<&str>;
    fn category(&self) -> Self::Category;
    fn title(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Listable for Job {
    type Category = EmploymentType;

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.title),
            Field::Location => Some(&self.location),
            Field::Description => Some(&self.description),
            Field::SeekerName | Field::SeekerEmail => None,
        }
    }

    fn category(&self) -> EmploymentType {
        self.employment_type
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Listable for Application {
    type Category = ApplicationStatus;

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.job_title),
            Field::SeekerName => Some(&self.seeker_name),
            Field::SeekerEmail => Some(&self.seeker_email),
            Field::Location | Field::Description => None,
        }
    }

    fn category(&self) -> ApplicationStatus {
        self.status
    }

    fn title(&self) -> &str {
        &self.job_title
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.applied_at
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<C> {
    /// Case-insensitive substring match on any of the fields.
    Contains { fields: Vec<Field>, needle: String },
    Is(C),
}

impl<C: PartialEq> Predicate<C> {
    pub fn matches<T: Listable<Category = C>>(&self, item: &T) -> bool {
        match self {
            Predicate::Contains { fields, needle } => {
                let needle = needle.to_lowercase();
                fields.iter().any(|field| {
                    item.field(*field)
                        .is_some_and(|value| value.to_lowercase().contains(&needle))
                })
            }
            Predicate::Is(category) => item.category() == *category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query<C> {
    predicates: Vec<Predicate<C>>,
    sort: SortKey,
}

impl<C> Default for Query<C> {
    fn default() -> Self {
        Query {
            predicates: Vec::new(),
            sort: SortKey::default(),
        }
    }
}

impl<C: PartialEq> Query<C> {
    pub fn new(sort: SortKey) -> Self {
        Query {
            predicates: Vec::new(),
            sort,
        }
    }

    /// Blank search text adds no predicate.
    pub fn search(mut self, fields: &[Field], needle: Option<&str>) -> Self {
        if let Some(needle) = needle.map(str::trim).filter(|needle| !needle.is_empty()) {
            self.predicates.push(Predicate::Contains {
                fields: fields.to_vec(),
                needle: needle.to_string(),
            });
        }

        self
    }

    pub fn category(mut self, category: Option<C>) -> Self {
        if let Some(category) = category {
            self.predicates.push(Predicate::Is(category));
        }

        self
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn predicates(&self) -> &[Predicate<C>] {
        &self.predicates
    }

    pub fn apply<'a, T: Listable<Category = C>>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut result: Vec<&T> = items
            .iter()
            .filter(|item| self.predicates.iter().all(|p| p.matches(*item)))
            .collect();

        match self.sort {
            SortKey::Latest => result.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
            SortKey::Oldest => result.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
            SortKey::Alphabetical => result.sort_by(|a, b| compare_titles(a.title(), b.title())),
        }

        result
    }
}

/// Root-locale collation, so `Ébéniste` sorts among the `E`s; exact order breaks ties.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let collated = match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };

    collated.then_with(|| a.cmp(b))
}
