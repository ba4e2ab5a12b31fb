use quill_db_schema::utils::{FETCH_LIMIT_DEFAULT, FETCH_LIMIT_MAX};

/// Where a page sits in a listing, with the limit/offset to load it.
///
/// Out-of-range requests are clamped rather than rejected: pages below 1 serve
/// the first page, pages past the end serve the last one. An empty listing
/// still has one (empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
  pub page: i64,
  pub total_pages: i64,
  pub limit: i64,
  pub offset: i64,
  pub has_next_page: bool,
  pub has_prev_page: bool,
}

pub fn page_window(page: Option<i64>, limit: Option<i64>, total_items: i64) -> PageWindow {
  let limit = limit
    .unwrap_or(FETCH_LIMIT_DEFAULT)
    .clamp(1, FETCH_LIMIT_MAX);
  let total_pages = (total_items.max(0) + limit - 1) / limit;
  let total_pages = total_pages.max(1);
  let page = page.unwrap_or(1).clamp(1, total_pages);
  PageWindow {
    page,
    total_pages,
    limit,
    offset: (page - 1) * limit,
    has_next_page: page < total_pages,
    has_prev_page: page > 1,
  }
}

#[cfg(test)]
mod tests {
  use super::page_window;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_pages_divide_evenly() {
    let w = page_window(Some(1), Some(10), 30);
    assert_eq!(3, w.total_pages);
    assert_eq!(0, w.offset);
    assert!(w.has_next_page);
    assert!(!w.has_prev_page);
  }

  #[test]
  fn test_partial_last_page() {
    let w = page_window(Some(4), Some(10), 31);
    assert_eq!(4, w.total_pages);
    assert_eq!(30, w.offset);
    assert!(!w.has_next_page);
    assert!(w.has_prev_page);
  }

  #[test]
  fn test_page_past_end_serves_last() {
    let w = page_window(Some(99), Some(10), 25);
    assert_eq!(3, w.page);
    assert_eq!(3, w.total_pages);
    assert_eq!(20, w.offset);
    assert!(!w.has_next_page);
  }

  #[test]
  fn test_page_below_one_serves_first() {
    let w = page_window(Some(0), Some(10), 25);
    assert_eq!(1, w.page);
    let w = page_window(Some(-3), Some(10), 25);
    assert_eq!(1, w.page);
  }

  #[test]
  fn test_empty_listing_has_one_page() {
    let w = page_window(Some(1), Some(10), 0);
    assert_eq!(1, w.page);
    assert_eq!(1, w.total_pages);
    assert_eq!(0, w.offset);
    assert!(!w.has_next_page);
    assert!(!w.has_prev_page);
  }

  #[test]
  fn test_limit_is_bounded() {
    assert_eq!(10, page_window(None, None, 100).limit);
    assert_eq!(50, page_window(None, Some(500), 100).limit);
    assert_eq!(1, page_window(None, Some(0), 100).limit);
  }
}
