//! The fixed sample database schema for the database-chat pipeline.
//!
//! The schema is a closed set of eight retail tables. Representing it as an
//! enum (rather than string literals scattered through bootstrap code) keeps
//! the DDL, table names, and seed data exhaustively checkable in one place.

use std::fmt;
use std::str::FromStr;

/// The closed set of tables in the sample retail database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleTable {
    Customers,
    Employees,
    Offices,
    OrderDetails,
    Orders,
    Payments,
    ProductLines,
    Products,
}

impl SampleTable {
    /// All tables in creation order.
    pub const ALL: [SampleTable; 8] = [
        SampleTable::Customers,
        SampleTable::Employees,
        SampleTable::Offices,
        SampleTable::OrderDetails,
        SampleTable::Orders,
        SampleTable::Payments,
        SampleTable::ProductLines,
        SampleTable::Products,
    ];

    /// SQL table name.
    pub fn name(&self) -> &'static str {
        match self {
            SampleTable::Customers => "customers",
            SampleTable::Employees => "employees",
            SampleTable::Offices => "offices",
            SampleTable::OrderDetails => "orderdetails",
            SampleTable::Orders => "orders",
            SampleTable::Payments => "payments",
            SampleTable::ProductLines => "productlines",
            SampleTable::Products => "products",
        }
    }

    /// Idempotent creation DDL for this table.
    pub fn create_ddl(&self) -> &'static str {
        match self {
            SampleTable::Customers => {
                "CREATE TABLE IF NOT EXISTS customers (
                    customerNumber INTEGER PRIMARY KEY,
                    customerName TEXT,
                    contactLastName TEXT,
                    contactFirstName TEXT,
                    phone TEXT,
                    addressLine1 TEXT,
                    addressLine2 TEXT,
                    city TEXT,
                    state TEXT,
                    postalCode TEXT,
                    country TEXT,
                    salesRepEmployeeNumber INTEGER,
                    creditLimit REAL
                )"
            }
            SampleTable::Employees => {
                "CREATE TABLE IF NOT EXISTS employees (
                    employeeNumber INTEGER PRIMARY KEY,
                    lastName TEXT,
                    firstName TEXT,
                    extension TEXT,
                    email TEXT,
                    officeCode TEXT,
                    reportsTo INTEGER,
                    jobTitle TEXT
                )"
            }
            SampleTable::Offices => {
                "CREATE TABLE IF NOT EXISTS offices (
                    officeCode TEXT PRIMARY KEY,
                    city TEXT,
                    phone TEXT,
                    addressLine1 TEXT,
                    addressLine2 TEXT,
                    state TEXT,
                    country TEXT,
                    postalCode TEXT,
                    territory TEXT
                )"
            }
            SampleTable::OrderDetails => {
                "CREATE TABLE IF NOT EXISTS orderdetails (
                    orderNumber INTEGER,
                    productCode TEXT,
                    quantityOrdered INTEGER,
                    priceEach REAL,
                    orderLineNumber INTEGER,
                    PRIMARY KEY (orderNumber, productCode)
                )"
            }
            SampleTable::Orders => {
                "CREATE TABLE IF NOT EXISTS orders (
                    orderNumber INTEGER PRIMARY KEY,
                    orderDate TEXT,
                    requiredDate TEXT,
                    shippedDate TEXT,
                    status TEXT,
                    comments TEXT,
                    customerNumber INTEGER
                )"
            }
            SampleTable::Payments => {
                "CREATE TABLE IF NOT EXISTS payments (
                    customerNumber INTEGER,
                    checkNumber TEXT,
                    paymentDate TEXT,
                    amount REAL,
                    PRIMARY KEY (customerNumber, checkNumber)
                )"
            }
            SampleTable::ProductLines => {
                "CREATE TABLE IF NOT EXISTS productlines (
                    productLine TEXT PRIMARY KEY,
                    textDescription TEXT,
                    htmlDescription TEXT,
                    image BLOB
                )"
            }
            SampleTable::Products => {
                "CREATE TABLE IF NOT EXISTS products (
                    productCode TEXT PRIMARY KEY,
                    productName TEXT,
                    productLine TEXT,
                    productScale TEXT,
                    productVendor TEXT,
                    productDescription TEXT,
                    quantityInStock INTEGER,
                    buyPrice REAL,
                    MSRP REAL
                )"
            }
        }
    }
}

impl fmt::Display for SampleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SampleTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleTable::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sample table: '{s}'"))
    }
}

/// One seed row for the customers table.
#[derive(Debug, Clone, Copy)]
pub struct SeedCustomer {
    pub customer_number: i64,
    pub customer_name: &'static str,
    pub contact_last_name: &'static str,
    pub contact_first_name: &'static str,
    pub phone: &'static str,
    pub address_line1: &'static str,
    pub address_line2: Option<&'static str>,
    pub city: &'static str,
    pub state: Option<&'static str>,
    pub postal_code: &'static str,
    pub country: &'static str,
    pub sales_rep_employee_number: i64,
    pub credit_limit: f64,
}

/// The two literal seed rows inserted into customers on first bootstrap.
///
/// Guarded by a row-count check so repeated bootstraps never duplicate them.
pub const SEED_CUSTOMERS: [SeedCustomer; 2] = [
    SeedCustomer {
        customer_number: 103,
        customer_name: "Atelier graphique",
        contact_last_name: "Schmitt",
        contact_first_name: "Carine",
        phone: "40.32.2555",
        address_line1: "54, rue Royale",
        address_line2: None,
        city: "Nantes",
        state: None,
        postal_code: "44000",
        country: "France",
        sales_rep_employee_number: 1370,
        credit_limit: 21000.00,
    },
    SeedCustomer {
        customer_number: 112,
        customer_name: "Signal Gift Stores",
        contact_last_name: "King",
        contact_first_name: "Jean",
        phone: "7025551838",
        address_line1: "8489 Strong St.",
        address_line2: None,
        city: "Las Vegas",
        state: Some("NV"),
        postal_code: "83030",
        country: "USA",
        sales_rep_employee_number: 1166,
        credit_limit: 71800.00,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_have_distinct_names() {
        let mut names: Vec<&str> = SampleTable::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_ddl_is_idempotent_form() {
        for table in SampleTable::ALL {
            let ddl = table.create_ddl();
            assert!(
                ddl.starts_with("CREATE TABLE IF NOT EXISTS"),
                "{table} DDL must use IF NOT EXISTS"
            );
            assert!(ddl.contains(table.name()));
        }
    }

    #[test]
    fn test_table_name_roundtrip() {
        for table in SampleTable::ALL {
            let parsed: SampleTable = table.name().parse().unwrap();
            assert_eq!(parsed, table);
        }
    }

    #[test]
    fn test_table_name_case_insensitive_parse() {
        let parsed: SampleTable = "CUSTOMERS".parse().unwrap();
        assert_eq!(parsed, SampleTable::Customers);
    }

    #[test]
    fn test_unknown_table_rejected() {
        assert!("invoices".parse::<SampleTable>().is_err());
    }

    #[test]
    fn test_seed_customers_fixed() {
        assert_eq!(SEED_CUSTOMERS.len(), 2);
        assert_eq!(SEED_CUSTOMERS[0].customer_number, 103);
        assert_eq!(SEED_CUSTOMERS[0].country, "France");
        assert!(SEED_CUSTOMERS[0].state.is_none());
        assert_eq!(SEED_CUSTOMERS[1].customer_number, 112);
        assert_eq!(SEED_CUSTOMERS[1].state, Some("NV"));
    }
}
