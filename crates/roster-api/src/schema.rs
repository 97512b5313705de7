//! Query and mutation roots, and schema construction.

use async_graphql::{Context, EmptySubscription, Object, Result, Schema};
use roster_core::{NewCourse, NewGrade, NewStudent, RecordId};
use roster_store::SharedStore;

use crate::types::{store, CourseObject, GradeObject, StudentObject};

/// The roster GraphQL schema type.
pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the shared store as context data.
pub fn build_schema(store: SharedStore) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub struct QueryRoot;

/// Root query
#[Object(name = "Query")]
impl QueryRoot {
    /// List of all students
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<StudentObject>> {
        let store = store(ctx)?.read().await;
        Ok(store.students().iter().cloned().map(StudentObject).collect())
    }

    /// List of all courses
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<CourseObject>> {
        let store = store(ctx)?.read().await;
        Ok(store.courses().iter().cloned().map(CourseObject).collect())
    }

    /// List of grades
    async fn grades(&self, ctx: &Context<'_>) -> Result<Vec<GradeObject>> {
        let store = store(ctx)?.read().await;
        Ok(store.grades().iter().cloned().map(GradeObject).collect())
    }

    /// Particular student
    async fn student(
        &self,
        ctx: &Context<'_>,
        id: Option<RecordId>,
    ) -> Result<Option<StudentObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = store(ctx)?.read().await;
        Ok(store.student(id).cloned().map(StudentObject))
    }

    /// Particular course
    async fn course(&self, ctx: &Context<'_>, id: Option<RecordId>) -> Result<Option<CourseObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = store(ctx)?.read().await;
        Ok(store.course(id).cloned().map(CourseObject))
    }

    /// Particular grade
    async fn grade(&self, ctx: &Context<'_>, id: Option<RecordId>) -> Result<Option<GradeObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = store(ctx)?.read().await;
        Ok(store.grade(id).cloned().map(GradeObject))
    }
}

/// Delete fields resolve to null whether or not anything matched.
pub struct MutationRoot;

/// Root mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a student
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        last_name: String,
        course_id: RecordId,
    ) -> Result<StudentObject> {
        let input = NewStudent {
            name,
            last_name,
            course_id,
        };
        let student = store(ctx)?.write().await.add_student(input);
        Ok(StudentObject(student))
    }

    /// Add a course
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<CourseObject> {
        let course = store(ctx)?
            .write()
            .await
            .add_course(NewCourse { name, description });
        Ok(CourseObject(course))
    }

    /// Add a grade
    async fn add_grades(
        &self,
        ctx: &Context<'_>,
        course_id: RecordId,
        student_id: RecordId,
        grade: i32,
    ) -> Result<GradeObject> {
        let input = NewGrade {
            course_id,
            student_id,
            score: grade,
        };
        let grade = store(ctx)?.write().await.add_grade(input);
        Ok(GradeObject(grade))
    }

    /// Delete a student
    async fn delete_student(
        &self,
        ctx: &Context<'_>,
        id: Option<RecordId>,
    ) -> Result<Option<StudentObject>> {
        if let Some(id) = id {
            store(ctx)?.write().await.delete_student(id);
        }
        Ok(None)
    }

    /// Delete a course
    async fn delete_course(
        &self,
        ctx: &Context<'_>,
        id: Option<RecordId>,
    ) -> Result<Option<CourseObject>> {
        if let Some(id) = id {
            store(ctx)?.write().await.delete_course(id);
        }
        Ok(None)
    }

    /// Delete a grade
    async fn delete_grade(
        &self,
        ctx: &Context<'_>,
        id: Option<RecordId>,
    ) -> Result<Option<GradeObject>> {
        if let Some(id) = id {
            store(ctx)?.write().await.delete_grade(id);
        }
        Ok(None)
    }
}
