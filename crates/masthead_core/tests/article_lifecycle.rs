use masthead_core::{
    Article, Author, Catalog, CatalogError, ErrorKind, Magazine, RepoError, ValidationError,
};
use uuid::Uuid;

fn setup() -> (Catalog, Uuid, Uuid) {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("Jane").unwrap();
    let magazine = catalog.create_magazine("Byte", "Tech").unwrap();
    (catalog, author, magazine)
}

#[test]
fn created_article_is_immediately_queryable_from_both_sides() {
    let (mut catalog, author, magazine) = setup();

    let id = catalog.create_article(author, magazine, "Rust in Production").unwrap();

    let by_author: Vec<_> = catalog
        .author_articles(author)
        .unwrap()
        .iter()
        .map(|a| a.id())
        .collect();
    let in_magazine: Vec<_> = catalog
        .magazine_articles(magazine)
        .unwrap()
        .iter()
        .map(|a| a.id())
        .collect();
    assert_eq!(by_author, vec![id]);
    assert_eq!(in_magazine, vec![id]);

    let article = catalog.article(id).unwrap();
    assert_eq!(article.author(), author);
    assert_eq!(article.magazine(), magazine);
    assert_eq!(article.title(), "Rust in Production");
}

#[test]
fn add_article_is_equivalent_to_create_article() {
    let (mut catalog, author, magazine) = setup();

    let id = catalog.add_article(author, magazine, "Borrowed Time").unwrap();

    assert_eq!(catalog.articles().len(), 1);
    assert_eq!(catalog.article(id).unwrap().author(), author);
}

#[test]
fn out_of_range_titles_are_value_errors() {
    let (mut catalog, author, magazine) = setup();

    for title in ["abcd".to_string(), "z".repeat(51)] {
        let err = catalog.create_article(author, magazine, title).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }
    assert!(catalog.articles().is_empty());
}

#[test]
fn unregistered_references_are_type_errors() {
    let (mut catalog, author, magazine) = setup();
    let stranger = Uuid::new_v4();

    let err = catalog
        .create_article(stranger, magazine, "Valid title")
        .unwrap_err();
    assert_eq!(err, CatalogError::UnknownAuthor(stranger));
    assert_eq!(err.kind(), ErrorKind::Type);

    let err = catalog
        .create_article(author, stranger, "Valid title")
        .unwrap_err();
    assert_eq!(err, CatalogError::UnknownMagazine(stranger));
    assert_eq!(err.kind(), ErrorKind::Type);

    assert!(catalog.articles().is_empty());
}

#[test]
fn entities_from_another_catalog_are_not_recognized() {
    let (mut catalog, _, magazine) = setup();
    let (_, foreign_author, _) = setup();

    let err = catalog
        .create_article(foreign_author, magazine, "Valid title")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn title_writes_are_ignored_after_construction() {
    let (mut catalog, author, magazine) = setup();
    let id = catalog.create_article(author, magazine, "Original").unwrap();

    catalog.set_article_title(id, "Another valid title").unwrap();
    catalog.set_article_title(id, "no").unwrap();

    assert_eq!(catalog.article(id).unwrap().title(), "Original");
}

#[test]
fn reassigning_author_and_magazine_moves_the_article() {
    let (mut catalog, jane, byte) = setup();
    let john = catalog.create_author("John").unwrap();
    let wired = catalog.create_magazine("Wired", "Tech").unwrap();
    let id = catalog.create_article(jane, byte, "Moving Parts").unwrap();

    catalog.set_article_author(id, john).unwrap();
    catalog.set_article_magazine(id, wired).unwrap();

    assert!(catalog.author_articles(jane).unwrap().is_empty());
    assert_eq!(catalog.author_articles(john).unwrap().len(), 1);
    assert!(catalog.magazine_articles(byte).unwrap().is_empty());
    assert_eq!(catalog.magazine_articles(wired).unwrap().len(), 1);
    assert_eq!(catalog.article(id).unwrap().title(), "Moving Parts");
}

#[test]
fn invalid_reassignment_is_a_type_error_and_keeps_reference() {
    let (mut catalog, author, magazine) = setup();
    let id = catalog.create_article(author, magazine, "Stay Put").unwrap();

    let err = catalog.set_article_author(id, magazine).unwrap_err();
    assert_eq!(err, CatalogError::UnknownAuthor(magazine));
    assert_eq!(err.kind(), ErrorKind::Type);

    let err = catalog.set_article_magazine(id, author).unwrap_err();
    assert_eq!(err, CatalogError::UnknownMagazine(author));

    let article = catalog.article(id).unwrap();
    assert_eq!(article.author(), author);
    assert_eq!(article.magazine(), magazine);
}

#[test]
fn unknown_article_id_is_reported() {
    let (mut catalog, author, magazine) = setup();
    let missing = Uuid::new_v4();

    assert_eq!(
        catalog.set_article_author(missing, author).unwrap_err(),
        CatalogError::UnknownArticle(missing)
    );
    assert_eq!(
        catalog.set_article_magazine(missing, magazine).unwrap_err(),
        CatalogError::UnknownArticle(missing)
    );
    assert_eq!(
        catalog.set_article_title(missing, "Whatever").unwrap_err(),
        CatalogError::UnknownArticle(missing)
    );
}

#[test]
fn an_id_cannot_name_both_an_author_and_a_magazine() {
    let mut catalog = Catalog::new();
    let shared = Uuid::new_v4();
    catalog
        .register_author(Author::with_id(shared, "Jane").unwrap())
        .unwrap();

    let err = catalog
        .register_magazine(Magazine::with_id(shared, "Byte", "Tech").unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::Repo(RepoError::DuplicateId {
            entity: "magazine",
            id: shared
        })
    );
    assert!(catalog.magazines().is_empty());

    let err = catalog
        .create_article(shared, shared, "Same id both sides")
        .unwrap_err();
    assert_eq!(err, CatalogError::UnknownMagazine(shared));
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!(catalog.articles().is_empty());
}

#[test]
fn register_article_checks_references_and_duplicates() {
    let (mut catalog, author, magazine) = setup();

    let orphan = Article::new(Uuid::new_v4(), magazine, "Orphaned").unwrap();
    assert_eq!(catalog.register_article(orphan).unwrap_err().kind(), ErrorKind::Type);

    let article = Article::new(author, magazine, "Imported").unwrap();
    catalog.register_article(article.clone()).unwrap();
    let err = catalog.register_article(article).unwrap_err();
    assert!(matches!(err, CatalogError::Repo(_)));
    assert_eq!(catalog.articles().len(), 1);
}

#[test]
fn author_and_magazine_setters_through_catalog() {
    let (mut catalog, author, magazine) = setup();

    catalog.set_author_name(author, "Someone Else").unwrap();
    assert_eq!(catalog.author(author).unwrap().name(), "Jane");

    assert!(catalog.set_magazine_name(magazine, "ab").unwrap());
    assert!(!catalog.set_magazine_name(magazine, "a").unwrap());
    assert_eq!(catalog.magazine(magazine).unwrap().name(), "ab");

    assert!(!catalog.set_magazine_category(magazine, "").unwrap());
    assert_eq!(catalog.magazine(magazine).unwrap().category(), "Tech");

    assert_eq!(
        catalog.set_magazine_name(author, "Valid").unwrap_err(),
        CatalogError::UnknownMagazine(author)
    );
    assert_eq!(
        catalog.set_magazine_category(author, "Science").unwrap_err(),
        CatalogError::UnknownMagazine(author)
    );
    assert_eq!(
        catalog.set_author_name(magazine, "Jane").unwrap_err(),
        CatalogError::UnknownAuthor(magazine)
    );
}

#[test]
fn construction_errors_surface_through_catalog() {
    let mut catalog = Catalog::new();

    assert_eq!(
        catalog.create_author("").unwrap_err(),
        CatalogError::Validation(ValidationError::EmptyAuthorName)
    );
    assert_eq!(
        catalog.create_magazine("B", "Tech").unwrap_err(),
        CatalogError::Validation(ValidationError::MagazineNameLength { chars: 1 })
    );
    assert_eq!(
        catalog.create_magazine("Byte", "").unwrap_err(),
        CatalogError::Validation(ValidationError::EmptyCategory)
    );
    assert!(catalog.authors().is_empty());
    assert!(catalog.magazines().is_empty());
}
