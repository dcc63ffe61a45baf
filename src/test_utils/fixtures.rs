use std::path::PathBuf;

use tempfile::TempDir;

/// A document with every style rule satisfied under the default config.
pub const CLEAN_SPEC: &str = r##"openapi: 3.0.3
info:
  title: Petstore
  version: "1.0.0"
  description: Pets as a service
  license:
    name: MIT
  contact:
    email: api@example.com
servers:
  - url: https://{region}.api.example.com/v1
    variables:
      region:
        default: us
paths:
  /pets/{petId}:
    get:
      operationId: getPet
      summary: Get a pet
      description: Returns a single pet
      tags: [pets]
      parameters:
        - {name: petId, in: path}
        - {name: X-Request-ID, in: header}
components:
  schemas:
    Pet:
      properties:
        petName:
          type: string
          example: Rex
        owner:
          $ref: "#/components/schemas/Owner"
"##;

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {data_path:?}");

        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a test file with content.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Create an OpenAPI document under `specs/`.
    #[must_use]
    pub fn create_spec(&self, name: &str, content: &str) -> PathBuf {
        self.create_file(&format!("specs/{name}"), content)
    }

    /// Create a project config file in the fixture root.
    #[must_use]
    pub fn create_project_config(&self, content: &str) -> PathBuf {
        self.create_file(crate::config::PROJECT_CONFIG_FILE, content)
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}
