use std::fs;
use std::path::Path;

use anyhow::Context;
use aula_client::AdminClient;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cli::{StudentAction, TeacherAction};

/// Read a JSON payload file into `T`.
pub fn read_payload<T>(path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Payload file {} is not valid JSON", path.display()))
}

fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
{
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run_students(client: &AdminClient, action: StudentAction) -> anyhow::Result<()> {
    let students = client.students();
    match action {
        StudentAction::List { query } => {
            let list = students.list(&query).await.context("Failed to list students")?;
            print_json(&list)
        }
        StudentAction::Get { id } => {
            let student = students
                .get(&id)
                .await
                .with_context(|| format!("Failed to fetch student {}", id))?;
            print_json(&student)
        }
        StudentAction::Create { file } => {
            let payload = read_payload(&file)?;
            let created = students
                .create(&payload)
                .await
                .context("Failed to create student")?;
            print_json(&created)
        }
        StudentAction::Update { id, file } => {
            let payload = read_payload(&file)?;
            let updated = students
                .update(&id, &payload)
                .await
                .with_context(|| format!("Failed to update student {}", id))?;
            print_json(&updated)
        }
        StudentAction::RegenerateCode { id } => {
            let code = students
                .regenerate_code(&id)
                .await
                .with_context(|| format!("Failed to regenerate the code of student {}", id))?;
            print_json(&code)
        }
    }
}

pub async fn run_teachers(client: &AdminClient, action: TeacherAction) -> anyhow::Result<()> {
    let teachers = client.teachers();
    match action {
        TeacherAction::List { query } => {
            let list = teachers.list(&query).await.context("Failed to list teachers")?;
            print_json(&list)
        }
        TeacherAction::Get { id } => {
            let teacher = teachers
                .get(&id)
                .await
                .with_context(|| format!("Failed to fetch teacher {}", id))?;
            print_json(&teacher)
        }
        TeacherAction::Create { file } => {
            let payload = read_payload(&file)?;
            let created = teachers
                .create(&payload)
                .await
                .context("Failed to create teacher")?;
            print_json(&created)
        }
        TeacherAction::Update { id, file } => {
            let payload = read_payload(&file)?;
            let updated = teachers
                .update(&id, &payload)
                .await
                .with_context(|| format!("Failed to update teacher {}", id))?;
            print_json(&updated)
        }
    }
}
