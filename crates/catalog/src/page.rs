//! Paged view over query results.

use crate::product::Product;

/// Default number of products per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One page of a product listing, numbered from 1.
///
/// There is always at least one page; an empty result is a single empty page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    items: Vec<&'a Product>,
    number: usize,
    total_pages: usize,
    total_items: usize,
}

impl<'a> Page<'a> {
    /// Cut `page` out of `products`.
    ///
    /// A page number outside `1..=total_pages` is clamped into that range, so
    /// a stale link past the end lands on the last page. A `page_size` of 0 is
    /// treated as 1.
    pub fn paginate(products: Vec<&'a Product>, page_size: usize, page: usize) -> Self {
        let size = page_size.max(1);
        let total_items = products.len();
        let total_pages = total_items.div_ceil(size).max(1);
        let number = page.clamp(1, total_pages);

        let items = products
            .into_iter()
            .skip((number - 1) * size)
            .take(size)
            .collect();

        Self {
            items,
            number,
            total_pages,
            total_items,
        }
    }

    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn into_items(self) -> Vec<&'a Product> {
        self.items
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of products across all pages.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn next_number(&self) -> Option<usize> {
        self.has_next().then_some(self.number + 1)
    }

    pub fn prev_number(&self) -> Option<usize> {
        self.has_prev().then_some(self.number - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{Money, ProductId};
    use std::collections::BTreeMap;

    fn products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                id: ProductId::new(format!("p-{i:02}")).unwrap(),
                name: format!("Product {i:02}"),
                category: "accessories".to_string(),
                sub_category: String::new(),
                brand: "Generic".to_string(),
                price: Money::from_major(10),
                short_description: String::new(),
                long_description: String::new(),
                images: Vec::new(),
                stock: 10,
                is_featured: false,
                attributes: BTreeMap::new(),
            })
            .collect()
    }

    fn names<'a>(page: &Page<'a>) -> Vec<&'a str> {
        page.items().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn first_page_is_full_and_links_forward() {
        let all = products(25);
        let page = Page::paginate(all.iter().collect(), 12, 1);

        assert_eq!(page.items().len(), 12);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.total_items(), 25);
        assert!(page.has_next());
        assert!(!page.has_prev());
        assert_eq!(page.next_number(), Some(2));
        assert_eq!(page.prev_number(), None);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let all = products(25);
        let page = Page::paginate(all.iter().collect(), 12, 3);

        assert_eq!(names(&page), ["Product 24"]);
        assert_eq!(page.number(), 3);
        assert!(!page.has_next());
        assert!(page.has_prev());
        assert_eq!(page.prev_number(), Some(2));
    }

    #[test]
    fn empty_result_is_a_single_empty_page() {
        let page = Page::paginate(Vec::new(), 12, 1);

        assert!(page.items().is_empty());
        assert_eq!(page.number(), 1);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.total_items(), 0);
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn out_of_range_page_numbers_are_clamped() {
        let all = products(13);

        let past_end = Page::paginate(all.iter().collect(), 12, 99);
        assert_eq!(past_end.number(), 2);
        assert_eq!(names(&past_end), ["Product 12"]);

        let zero = Page::paginate(all.iter().collect(), 12, 0);
        assert_eq!(zero.number(), 1);
        assert_eq!(zero.items().len(), 12);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let all = products(24);
        let page = Page::paginate(all.iter().collect(), 12, 2);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items().len(), 12);
        assert!(!page.has_next());
    }

    #[test]
    fn zero_page_size_means_one_per_page() {
        let all = products(3);
        let page = Page::paginate(all.iter().collect(), 0, 2);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(names(&page), ["Product 01"]);
    }
}
