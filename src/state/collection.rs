use crate::data_model::{unset_id, Entity};
use crate::state::store::StoreError;
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// In-memory image of one store collection, loadable from and flushed to
/// `<root>/collection/<name>/<id>/data.js` plus a `cnt` high-water file.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    pub name: String,
    pub count: u64,
    pub items: HashMap<u64, T>,
}

impl<T> Collection<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
{
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            items: HashMap::new(),
        }
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.items.get(&id).cloned()
    }

    pub fn get_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.items.values().filter(|itm| pred(itm)).cloned().collect()
    }

    /// Insert or replace; assigns the next id when the record's id is unset.
    pub fn set(&mut self, itm: T) -> u64 {
        let mut itm = itm;
        let mut id = itm.id();
        if id == unset_id() {
            self.count += 1;
            id = self.count;
            itm.set_id(id);
        } else if id > self.count {
            self.count = id;
        }
        self.items.insert(id, itm);
        id
    }

    fn dir(&self, root: &str) -> String {
        root.to_string() + "/collection/" + &self.name
    }

    pub fn read_fs(&mut self, root: &str) -> Result<(), StoreError> {
        let dir = self.dir(root);
        if !Path::new(&dir).is_dir() {
            return Ok(());
        }

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let idx = match entry.file_name().to_string_lossy().parse::<u64>() {
                Ok(idx) => idx,
                Err(_) => continue,
            };
            let data_path = entry.path().join("data.js");
            if data_path.is_file() {
                let text = fs::read_to_string(data_path)?;
                let itm: T = serde_json::from_str(&text)?;
                self.items.insert(idx, itm);
                self.count = std::cmp::max(self.count, idx);
            }
        }

        if let Ok(cnt_str) = fs::read_to_string(dir + "/cnt") {
            if let Ok(cnt) = cnt_str.trim().parse::<u64>() {
                self.count = std::cmp::max(self.count, cnt);
            }
        }

        info!("Collection {} has {} items", self.name, self.items.len());
        Ok(())
    }

    /// Persist one item and the counter; the rest of the tree is untouched.
    pub fn write_item(&self, root: &str, id: u64) -> Result<(), StoreError> {
        let itm = match self.items.get(&id) {
            Some(itm) => itm,
            None => return Ok(()),
        };
        let dir = self.dir(root);
        let item_dir = dir.clone() + "/" + &id.to_string();
        fs::create_dir_all(&item_dir)?;
        fs::write(item_dir + "/data.js", serde_json::to_string(itm)?)?;
        fs::write(dir + "/cnt", self.count.to_string())?;
        Ok(())
    }
}
