use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use crate::features::regions::models::{Province, Ward};
use crate::features::regions::services::{DataPaths, RegionService, RegionStore};

/// Three provinces, five wards, every parent code resolves
pub const PROVINCES_JSON: &str = r#"{
    "01": {"code": "01", "name": "Hà Nội", "slug": "ha-noi", "type": "thành phố", "name_with_type": "Thành phố Hà Nội"},
    "79": {"code": "79", "name": "Hồ Chí Minh", "slug": "ho-chi-minh", "type": "thành phố", "name_with_type": "Thành phố Hồ Chí Minh"},
    "04": {"code": "04", "name": "Cao Bằng", "slug": "cao-bang", "type": "tỉnh", "name_with_type": "Tỉnh Cao Bằng"}
}"#;

pub const WARDS_JSON: &str = r#"{
    "00001": {"code": "00001", "name": "Phúc Xá", "slug": "phuc-xa", "type": "phường", "name_with_type": "Phường Phúc Xá", "path": "Phúc Xá, Hà Nội", "path_with_type": "Phường Phúc Xá, Thành phố Hà Nội", "parent_code": "01"},
    "00004": {"code": "00004", "name": "Trúc Bạch", "slug": "truc-bach", "type": "phường", "name_with_type": "Phường Trúc Bạch", "path": "Trúc Bạch, Hà Nội", "path_with_type": "Phường Trúc Bạch, Thành phố Hà Nội", "parent_code": "01"},
    "00006": {"code": "00006", "name": "Vĩnh Phúc", "slug": "vinh-phuc", "type": "phường", "name_with_type": "Phường Vĩnh Phúc", "path": "Vĩnh Phúc, Hà Nội", "path_with_type": "Phường Vĩnh Phúc, Thành phố Hà Nội", "parent_code": "01"},
    "26734": {"code": "26734", "name": "Bến Thành", "slug": "ben-thanh", "type": "phường", "name_with_type": "Phường Bến Thành", "path": "Bến Thành, Hồ Chí Minh", "path_with_type": "Phường Bến Thành, Thành phố Hồ Chí Minh", "parent_code": "79"},
    "01279": {"code": "01279", "name": "Hưng Đạo", "slug": "hung-dao", "type": "xã", "name_with_type": "Xã Hưng Đạo", "path": "Hưng Đạo, Cao Bằng", "path_with_type": "Xã Hưng Đạo, Tỉnh Cao Bằng", "parent_code": "04"}
}"#;

/// Four provinces, seven wards; ward "99999" points at a province that does not exist
pub const EXTENDED_PROVINCES_JSON: &str = r#"{
    "01": {"code": "01", "name": "Hà Nội", "slug": "ha-noi", "type": "thành phố", "name_with_type": "Thành phố Hà Nội"},
    "79": {"code": "79", "name": "Hồ Chí Minh", "slug": "ho-chi-minh", "type": "thành phố", "name_with_type": "Thành phố Hồ Chí Minh"},
    "04": {"code": "04", "name": "Cao Bằng", "slug": "cao-bang", "type": "tỉnh", "name_with_type": "Tỉnh Cao Bằng"},
    "48": {"code": "48", "name": "Đà Nẵng", "slug": "da-nang", "type": "thành phố", "name_with_type": "Thành phố Đà Nẵng"}
}"#;

pub const EXTENDED_WARDS_JSON: &str = r#"{
    "00001": {"code": "00001", "name": "Phúc Xá", "slug": "phuc-xa", "type": "phường", "name_with_type": "Phường Phúc Xá", "path": "Phúc Xá, Hà Nội", "path_with_type": "Phường Phúc Xá, Thành phố Hà Nội", "parent_code": "01"},
    "00004": {"code": "00004", "name": "Trúc Bạch", "slug": "truc-bach", "type": "phường", "name_with_type": "Phường Trúc Bạch", "path": "Trúc Bạch, Hà Nội", "path_with_type": "Phường Trúc Bạch, Thành phố Hà Nội", "parent_code": "01"},
    "00006": {"code": "00006", "name": "Vĩnh Phúc", "slug": "vinh-phuc", "type": "phường", "name_with_type": "Phường Vĩnh Phúc", "path": "Vĩnh Phúc, Hà Nội", "path_with_type": "Phường Vĩnh Phúc, Thành phố Hà Nội", "parent_code": "01"},
    "26734": {"code": "26734", "name": "Bến Thành", "slug": "ben-thanh", "type": "phường", "name_with_type": "Phường Bến Thành", "path": "Bến Thành, Hồ Chí Minh", "path_with_type": "Phường Bến Thành, Thành phố Hồ Chí Minh", "parent_code": "79"},
    "01279": {"code": "01279", "name": "Hưng Đạo", "slug": "hung-dao", "type": "xã", "name_with_type": "Xã Hưng Đạo", "path": "Hưng Đạo, Cao Bằng", "path_with_type": "Xã Hưng Đạo, Tỉnh Cao Bằng", "parent_code": "04"},
    "20194": {"code": "20194", "name": "Hải Châu", "slug": "hai-chau", "type": "phường", "name_with_type": "Phường Hải Châu", "path": "Hải Châu, Đà Nẵng", "path_with_type": "Phường Hải Châu, Thành phố Đà Nẵng", "parent_code": "48"},
    "99999": {"code": "99999", "name": "Đảo Xa", "slug": "dao-xa", "type": "đặc khu", "name_with_type": "Đặc khu Đảo Xa", "path": "Đảo Xa", "path_with_type": "Đặc khu Đảo Xa", "parent_code": "96"}
}"#;

/// A pair of data files in a unique temp directory, removed on drop
pub struct TempDataset {
    dir: PathBuf,
}

impl TempDataset {
    pub fn new(provinces_json: &str, wards_json: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("vn-admin-api-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("failed to create fixture dir");
        std::fs::write(dir.join("province.json"), provinces_json)
            .expect("failed to write province fixture");
        std::fs::write(dir.join("ward.json"), wards_json).expect("failed to write ward fixture");
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn paths(&self) -> DataPaths {
        DataPaths {
            provinces: self.dir.join("province.json"),
            wards: self.dir.join("ward.json"),
        }
    }
}

impl Drop for TempDataset {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

pub fn sample_province(code: &str, name: &str, unit_type: &str) -> Province {
    Province {
        code: code.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        unit_type: unit_type.to_string(),
        name_with_type: format!("{} {}", unit_type, name),
    }
}

pub fn sample_ward(code: &str, name: &str, unit_type: &str, parent_code: &str) -> Ward {
    let province_name = match parent_code {
        "01" => "Hà Nội",
        "79" => "Hồ Chí Minh",
        _ => "Không rõ",
    };
    Ward {
        code: code.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        unit_type: unit_type.to_string(),
        name_with_type: format!("{} {}", unit_type, name),
        path: format!("{}, {}", name, province_name),
        path_with_type: format!("{} {}, {}", unit_type, name, province_name),
        parent_code: parent_code.to_string(),
    }
}

/// Build a store from the given documents, loaded and ready to query
pub async fn loaded_service(dataset: &TempDataset) -> Arc<RegionService> {
    let store = Arc::new(RegionStore::new(dataset.paths()));
    store.reload().await.expect("fixture dataset must load");
    Arc::new(RegionService::new(store))
}

/// A service whose store has never been loaded
pub fn unloaded_service(dataset: &TempDataset) -> Arc<RegionService> {
    Arc::new(RegionService::new(Arc::new(RegionStore::new(
        dataset.paths(),
    ))))
}

/// Wrap a feature router the way `main` does, minus the network layers
pub fn api_router(router: Router) -> Router {
    Router::new().nest("/api/v1", router)
}
