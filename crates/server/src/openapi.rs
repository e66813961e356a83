//! OpenAPI document served at `/api-docs/openapi.json` (Swagger UI on `/docs`).
//!
//! The `*Doc` types mirror the wire shapes of `models` so the entity crate does
//! not need to depend on `utoipa`.
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct TeacherDoc { pub id: i32, pub first_name: String, pub last_name: String, pub years_of_experience: i32 }

#[derive(ToSchema)]
pub struct NewTeacherDoc { pub first_name: String, pub last_name: String, pub years_of_experience: i32 }

/// Omitted fields stay unchanged; `null` is rejected for these columns.
#[derive(ToSchema)]
pub struct TeacherPatchDoc {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub years_of_experience: Option<i32>,
}

#[derive(ToSchema)]
pub struct CourseDoc { pub id: i32, pub title: String, pub description: Option<String>, pub teacher_id: i32 }

#[derive(ToSchema)]
pub struct NewCourseDoc { pub teacher_id: i32, pub title: String, pub description: Option<String> }

#[derive(ToSchema)]
pub struct TeacherCourseDoc { pub title: String, pub description: Option<String> }

/// Omitted fields stay unchanged; `description: null` clears the description.
#[derive(ToSchema)]
pub struct CoursePatchDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub teacher_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct StudentDoc { pub id: i32, pub first_name: String, pub last_name: String }

#[derive(ToSchema)]
pub struct NewStudentDoc { pub first_name: String, pub last_name: String }

#[derive(ToSchema)]
pub struct StudentPatchDoc { pub first_name: Option<String>, pub last_name: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::teachers::create,
        crate::routes::teachers::get,
        crate::routes::teachers::list,
        crate::routes::teachers::update,
        crate::routes::teachers::delete,
        crate::routes::teachers::list_courses,
        crate::routes::teachers::create_course,
        crate::routes::courses::create,
        crate::routes::courses::get,
        crate::routes::courses::list,
        crate::routes::courses::read_teacher,
        crate::routes::courses::read_students,
        crate::routes::courses::update,
        crate::routes::courses::add_student,
        crate::routes::courses::remove_student,
        crate::routes::courses::delete,
        crate::routes::students::create,
        crate::routes::students::get,
        crate::routes::students::list,
        crate::routes::students::read_courses,
        crate::routes::students::update,
        crate::routes::students::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            TeacherDoc,
            NewTeacherDoc,
            TeacherPatchDoc,
            CourseDoc,
            NewCourseDoc,
            TeacherCourseDoc,
            CoursePatchDoc,
            StudentDoc,
            NewStudentDoc,
            StudentPatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "teachers"),
        (name = "courses"),
        (name = "students")
    )
)]
pub struct ApiDoc;
