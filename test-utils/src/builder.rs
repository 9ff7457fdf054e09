use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Instructor, Lesson};
///
/// let test = TestBuilder::new()
///     .with_table(Instructor)
///     .with_table(Lesson)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for the seat booking flow.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Instructor
    /// - Student
    /// - Lesson
    /// - OrderSeat
    /// - SeatInvitation
    /// - SeatIdentityForm
    ///
    /// Use this when testing invitation, claim, or identity form functionality.
    /// For tests involving lesson analyses, use `with_analysis_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(self) -> Self {
        self.with_table(Instructor)
            .with_table(Student)
            .with_table(Lesson)
            .with_table(OrderSeat)
            .with_table(SeatInvitation)
            .with_table(SeatIdentityForm)
    }

    /// Adds all tables required for lesson analysis operations.
    ///
    /// Equivalent to `with_booking_tables()` followed by
    /// `with_table(LessonAnalysis)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_analysis_tables(self) -> Self {
        self.with_booking_tables().with_table(LessonAnalysis)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
