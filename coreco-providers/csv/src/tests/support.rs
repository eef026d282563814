use std::io::Cursor;

use super::{Catalog, RatingsFilter, RatingsProvider};

pub(crate) const BOOKS_CSV: &str = "\
book_id,goodreads_book_id,isbn,authors,original_publication_year,title,image_url
1,2767052,439023483,Suzanne Collins,2008.0,The Hunger Games,https://example.test/1.jpg
2,3,439554934,\"J.K. Rowling, Mary GrandPré\",1997.0,Harry Potter and the Philosopher's Stone,
3,41865,,Stephenie Meyer,2005.0,Twilight,
4,2657,61120081,Harper Lee,1960.0,To Kill a Mockingbird,
5,1885,679783261,Homer,-720.0,The Odyssey,
";

pub(crate) fn catalog() -> Catalog {
    Catalog::try_from_reader("books", Cursor::new(BOOKS_CSV)).expect("fixture catalog loads")
}

pub(crate) fn ratings(raw: &str, filter: RatingsFilter) -> RatingsProvider {
    RatingsProvider::try_from_reader("ratings", Cursor::new(raw.to_owned()), &catalog(), &filter)
        .expect("fixture ratings load")
}
