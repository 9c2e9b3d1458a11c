//! In-memory page cache.

use crate::core::settings::Settings;
use crate::core::traits::PageCache;
use di::{Ref, inject, injectable};
use log::debug;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

struct CachedPage {
    html: String,
    rendered_at: Instant,
}

pub struct InMemoryPageCache {
    ttl: Duration,
    pages: RwLock<HashMap<String, CachedPage>>,
}

#[injectable(PageCache)]
impl InMemoryPageCache {
    #[inject]
    pub fn create(settings: Ref<Settings>) -> InMemoryPageCache {
        InMemoryPageCache::with_ttl(settings.page_cache_ttl)
    }
}

impl InMemoryPageCache {
    pub fn with_ttl(ttl: Duration) -> InMemoryPageCache {
        InMemoryPageCache {
            ttl,
            pages: RwLock::new(HashMap::new()),
        }
    }
}

impl PageCache for InMemoryPageCache {
    fn get(&self, path: &str) -> Option<String> {
        let pages = self.pages.read().unwrap_or_else(|e| e.into_inner());
        pages
            .get(path)
            .filter(|page| page.rendered_at.elapsed() < self.ttl)
            .map(|page| page.html.clone())
    }

    fn put(&self, path: &str, html: String) {
        if self.ttl.is_zero() {
            return;
        }

        let mut pages = self.pages.write().unwrap_or_else(|e| e.into_inner());
        pages.insert(
            path.to_owned(),
            CachedPage {
                html,
                rendered_at: Instant::now(),
            },
        );
    }

    fn revalidate_path(&self, path: &str) {
        let mut pages = self.pages.write().unwrap_or_else(|e| e.into_inner());
        if pages.remove(path).is_some() {
            debug!("revalidated {path}");
        }
    }
}
