//! The remote collections the application browses.

/// A displayed column: the record field and its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub title: &'static str,
}

const fn column(field: &'static str, title: &'static str) -> Column {
    Column { field, title }
}

const USER_COLUMNS: &[Column] = &[
    column("firstName", "First Name"),
    column("lastName", "Last Name"),
    column("email", "Email"),
    column("phone", "Phone"),
    column("birthDate", "Date of Birth"),
    column("age", "Age"),
    column("gender", "Gender"),
];

const PRODUCT_COLUMNS: &[Column] = &[
    column("title", "Title"),
    column("brand", "Brand"),
    column("category", "Category"),
    column("price", "Price"),
    column("rating", "Rating"),
    column("stock", "Stock"),
];

/// A collection endpoint on the demo API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Products,
}

impl Resource {
    /// Path segment under the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Products => "products",
        }
    }

    /// Name of the array holding the records in a page response.
    pub fn items_field(self) -> &'static str {
        self.path()
    }

    /// Fields requested through `select`.
    pub fn select_fields(self) -> &'static [&'static str] {
        match self {
            Resource::Users => &[
                "firstName",
                "lastName",
                "email",
                "phone",
                "birthDate",
                "age",
                "gender",
            ],
            Resource::Products => &[
                "title",
                "description",
                "price",
                "category",
                "stock",
                "brand",
                "thumbnail",
                "rating",
            ],
        }
    }

    /// `select` query value.
    pub fn select_param(self) -> String {
        self.select_fields().join(",")
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            Resource::Users => USER_COLUMNS,
            Resource::Products => PRODUCT_COLUMNS,
        }
    }

    pub fn default_page_size(self) -> usize {
        match self {
            Resource::Users => 5,
            Resource::Products => 20,
        }
    }

    /// Rows-per-page choices offered by the pager.
    pub fn page_size_options(self) -> &'static [usize] {
        match self {
            Resource::Users => &[5, 10, 15],
            Resource::Products => &[20],
        }
    }
}
