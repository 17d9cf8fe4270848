//! テストフィクスチャ管理

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Six assets covering every media type, a mix of tags and entities.
pub const SAMPLE_CATALOG: &str = r##"[
  {"id":"asset-1","title":"Night street","description":"Rainy city lights","type":"Video",
   "tags":["neon","urban"],"entities":[],"source":"Reddit","score":92,"year":2024,
   "duration":45,"fileSize":12.5,"color":"#3b82f6"},
  {"id":"asset-2","title":"Forest trail","description":"Morning fog","type":"Image",
   "tags":["nature"],"entities":["NASA"],"source":"Unsplash","score":60,"year":2021,
   "fileSize":2.1,"color":"#10b981"},
  {"id":"asset-3","title":"Launch recap","description":"Rocket launch coverage","type":"Video",
   "tags":["space","nature"],"entities":["NASA","SpaceX"],"source":"YouTube","score":85,"year":2023,
   "duration":300,"fileSize":80,"color":"#3b82f6"},
  {"id":"asset-4","title":"Stadium anthem","description":"Live concert audio","type":"Audio",
   "tags":["music","crowd"],"entities":["Taylor Swift"],"source":"Spotify","score":78,"year":2024,
   "duration":210,"fileSize":6.4,"color":"#ec4899"},
  {"id":"asset-5","title":"Quarterly report","description":"Neon signage market","type":"Document",
   "tags":["business"],"entities":["Sony"],"source":"Reddit","score":40,"year":2020,
   "fileSize":0.8,"color":"#f59e0b"},
  {"id":"asset-6","title":"Alley mural","description":"Street art","type":"Image",
   "tags":["urban","art"],"entities":[],"source":"Instagram","score":100,"year":2022,
   "fileSize":3.3,"color":"#ec4899"}
]"##;

/// 一時ディレクトリにカタログと記録済み応答を置く
pub struct CatalogFixture {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl CatalogFixture {
    pub fn new() -> Self {
        let fixture = Self { dir: tempfile::tempdir().expect("create temp dir") };
        fixture.write("catalog.json", SAMPLE_CATALOG);
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog(&self) -> PathBuf {
        self.dir.path().join("catalog.json")
    }

    /// ファイルを作成
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }
}

/// Ids of the `results` array of a JSON report.
#[allow(dead_code)]
pub fn result_ids(report: &serde_json::Value) -> Vec<String> {
    report["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|asset| asset["id"].as_str().expect("id string").to_string())
        .collect()
}
