//! Create `student_course` join table.
//!
//! The two foreign keys are crossed: `student_id` references `courses.id`
//! and `course_id` references `students.id`. Existing databases were laid
//! out this way, so the entity in `models::student_course` writes the
//! course id into `student_id` and the student id into `course_id`.
//! Deleting either side removes its join rows through ON DELETE CASCADE.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentCourse::Table)
                    .if_not_exists()
                    .col(integer(StudentCourse::StudentId))
                    .col(integer(StudentCourse::CourseId))
                    .primary_key(
                        Index::create()
                            .col(StudentCourse::StudentId)
                            .col(StudentCourse::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course_student_id")
                            .from(StudentCourse::Table, StudentCourse::StudentId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course_course_id")
                            .from(StudentCourse::Table, StudentCourse::CourseId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(StudentCourse::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum StudentCourse { Table, StudentId, CourseId }

#[derive(DeriveIden)]
enum Course {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Student {
    #[sea_orm(iden = "students")]
    Table,
    Id,
}
