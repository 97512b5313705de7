//! GraphQL object types over the stored records.
//!
//! Relation fields re-scan the store every time they are resolved; nothing
//! is cached between fields or requests.

use async_graphql::{Context, Object, Result};
use roster_core::{Course, Grade, RecordId, Student};
use roster_store::SharedStore;

/// The shared store placed in the schema data.
pub(crate) fn store<'a>(ctx: &'a Context<'_>) -> Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct CourseObject(pub Course);

pub struct StudentObject(pub Student);

/// Has no output field for the stored score.
pub struct GradeObject(pub Grade);

/// Represent courses
#[Object(name = "course")]
impl CourseObject {
    async fn id(&self) -> RecordId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> &str {
        &self.0.description
    }
}

/// Represent students
#[Object(name = "students")]
impl StudentObject {
    async fn id(&self) -> RecordId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn last_name(&self) -> &str {
        &self.0.last_name
    }

    async fn course_id(&self) -> RecordId {
        self.0.course_id
    }

    async fn course(&self, ctx: &Context<'_>) -> Result<Option<CourseObject>> {
        let store = store(ctx)?.read().await;
        Ok(store.course_of_student(&self.0).cloned().map(CourseObject))
    }
}

/// Represent grades
#[Object(name = "grades")]
impl GradeObject {
    async fn id(&self) -> RecordId {
        self.0.id
    }

    async fn student_id(&self) -> RecordId {
        self.0.student_id
    }

    async fn course_id(&self) -> RecordId {
        self.0.course_id
    }

    async fn course(&self, ctx: &Context<'_>) -> Result<Option<CourseObject>> {
        let store = store(ctx)?.read().await;
        Ok(store.course_of_grade(&self.0).cloned().map(CourseObject))
    }

    async fn student(&self, ctx: &Context<'_>) -> Result<Option<StudentObject>> {
        let store = store(ctx)?.read().await;
        Ok(store.student_of_grade(&self.0).cloned().map(StudentObject))
    }
}
