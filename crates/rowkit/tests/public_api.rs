//! End-to-end checks of the public API, as a downstream crate uses it.

use std::cell::RefCell;
use std::collections::BTreeMap;

use rowkit::prelude::*;
use rowkit::{expect_label, field, labels, record, variant, ProjectError};

labels! {
    pub Title = "title",
    pub Year = "year",
    pub Subtitle = "subtitle",
    pub Isbn = "isbn",
    pub Success = "ok",
    pub Failure = "error",
    pub Unknown = "unknown",
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Book {
        required {
            Title => title: String,
            Year => year: u16,
        }
        optional {
            Subtitle => subtitle: String,
            Isbn => isbn: String,
        }
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Citation {
        required {
            Title => title: String,
            Year => year: u16,
        }
        optional {}
    }
}

variant! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Outcome with OutcomeCases {
        Done(i32) as ok: Success,
        Failed(String) as error: Failure,
    }
}

variant! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum CatalogError with CatalogErrorCases {
        NoSuchTitle(String) as unknown: Unknown,
        BadRecord(String) as error: Failure,
    }
}

fn dune() -> Book {
    Book::new("Dune".to_string(), 1965)
}

fn lookup(catalog: &BTreeMap<String, Book>, title: &str) -> Result<u16, CatalogError> {
    match catalog.get(title) {
        Some(book) => Ok(*book.req(Year)),
        None => Ok(throw(field!(Unknown = title.to_string()))?),
    }
}

#[test]
fn test_optional_present_and_absent() {
    let book = dune().with(Subtitle, "Book One".to_string());

    assert_eq!(
        get_optional(Subtitle, &book).map(String::as_str),
        Some("Book One")
    );
    assert_eq!(get_optional(Isbn, &book), None);
}

#[test]
fn test_required_has_no_wrapper() {
    let book = dune();
    let title: &String = get_required(Title, &book);
    assert_eq!(title, "Dune");
    assert_eq!(*get_required(Year, &book), 1965);

    // Same labels, different container.
    let citation = Citation::new("Dune".to_string(), 1965);
    assert_eq!(get_required(Title, &citation), get_required(Title, &book));
}

#[test]
fn test_flipped_forms_agree() {
    let book = dune().with(Isbn, "978-0441013593".to_string());

    assert_eq!(book.opt(Isbn), get_optional(Isbn, &book));
    assert_eq!(book.opt(Subtitle), get_optional(Subtitle, &book));
    assert_eq!(book.req(Title), get_required(Title, &book));
    assert_eq!(book.req(Year), get_required(Year, &book));
}

#[test]
fn test_variant_optional_access() {
    let failed: Outcome = inj(field!(Failure = "boom".to_string()));
    let done: Outcome = variant(field!(Success = 7));

    assert_eq!(get_optional(Success, &failed), None);
    assert_eq!(failed.opt(Failure).map(String::as_str), Some("boom"));
    assert_eq!(get_optional(Success, &done), Some(&7));
    assert_eq!(get_optional(Failure, &done), None);
}

#[test]
fn test_match_invokes_handler_for_label() {
    let calls = RefCell::new(Vec::new());
    let failed: Outcome = inj(field!(Failure = "boom".to_string()));

    match_variant(
        OutcomeCases {
            ok: |n: i32| calls.borrow_mut().push(format!("ok({n})")),
            error: |e: String| calls.borrow_mut().push(format!("error({e})")),
        },
        failed,
    );

    assert_eq!(calls.into_inner(), vec!["error(boom)".to_string()]);
}

#[test]
fn test_shared_label_across_unions() {
    // `Failure` names an alternative in two unions and selects in both.
    let a: Outcome = inj(field!(Failure = "a".to_string()));
    let b: CatalogError = inj(field!(Failure = "b".to_string()));

    assert_eq!(project(Failure, &a).map(String::as_str), Some("a"));
    assert_eq!(project(Failure, &b).map(String::as_str), Some("b"));
    assert_eq!(a.label(), b.label());
}

#[test]
fn test_throw_lands_in_callers_union() {
    let mut catalog = BTreeMap::new();
    catalog.insert("Dune".to_string(), dune());

    assert_eq!(lookup(&catalog, "Dune"), Ok(1965));

    let err = lookup(&catalog, "Emma").unwrap_err();
    assert_eq!(err, CatalogError::NoSuchTitle("Emma".to_string()));
    assert_eq!(
        expect_label(Failure, &err),
        Err(ProjectError::LabelMismatch {
            expected: "error",
            found: "unknown",
        })
    );
}

#[test]
fn test_fold_first_wins() {
    let map = fold_map_first([("k", "a"), ("k", "b")], Some);
    assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![("k", "a")]);
}

#[test]
fn test_fold_books_by_year() {
    let books = vec![
        Book::new("Dune".to_string(), 1965),
        Book::new("The Moon Is a Harsh Mistress".to_string(), 1966),
        Book::new("Dune Messiah".to_string(), 1969),
        Book::new("Flowers for Algernon".to_string(), 1966),
    ];

    let first_by_year = fold_map_first(&books, |book| Some((*book.req(Year), book.req(Title).as_str())));

    assert_eq!(first_by_year[&1966u16], "The Moon Is a Harsh Mistress");
    assert_eq!(first_by_year.len(), 3);
}

#[test]
fn test_non_empty_from_head_and_tail() {
    let xs = non_empty_vec(HeadTail {
        head: 1,
        tail: vec![2, 3],
    });
    assert_eq!(xs.into_vec(), vec![1, 2, 3]);
}

#[test]
fn test_symbol_names() {
    assert_eq!(symbol(&Title).name(), "title");
    assert_eq!(symbol(&field!(Year = 2000)).to_string(), "year");
}

#[test]
fn test_prelude_covers_unordered_fold() {
    let books = [dune(), Book::new("Dune".to_string(), 1984)];
    let by_title = fold_map_first_unordered(&books, |book| Some((book.req(Title).as_str(), *book.req(Year))));
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title["Dune"], 1965);
}
