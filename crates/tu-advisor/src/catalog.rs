use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Micro-degree module offered in the module explorer.
pub struct CatalogModule {
    pub name: &'static str,
    pub departments: &'static [&'static str],
    pub credits: u32,
}

impl CatalogModule {
    pub fn department_label(&self) -> String {
        self.departments.join(" + ")
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .departments
                .iter()
                .any(|department| department.to_lowercase().contains(needle))
    }
}

const CATALOG: &[CatalogModule] = &[
    CatalogModule {
        name: "AI Convergence Business MD",
        departments: &["Business Administration", "Computer Science"],
        credits: 12,
    },
    CatalogModule {
        name: "Big Data Analytics Fundamentals MD",
        departments: &["Industrial Engineering"],
        credits: 9,
    },
    CatalogModule {
        name: "Digital Marketing MD",
        departments: &["Business Administration"],
        credits: 15,
    },
    CatalogModule {
        name: "Smart Factory Operations MD",
        departments: &["Mechanical Engineering", "Industrial Engineering"],
        credits: 12,
    },
    CatalogModule {
        name: "Full-Stack Web Development MD",
        departments: &["Computer Science"],
        credits: 15,
    },
    CatalogModule {
        name: "UX/UI Design MD",
        departments: &["Design"],
        credits: 9,
    },
];

pub fn catalog_modules() -> &'static [CatalogModule] {
    CATALOG
}

/// Case-insensitive substring search over module names and departments.
/// A blank query returns the whole catalog.
pub fn search_modules(query: &str) -> Vec<&'static CatalogModule> {
    let needle = query.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|module| needle.is_empty() || module.matches(&needle))
        .collect()
}

pub fn find_module(name: &str) -> Option<&'static CatalogModule> {
    let wanted = name.trim();
    CATALOG
        .iter()
        .find(|module| module.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::{catalog_modules, find_module, search_modules};

    #[test]
    fn catalog_has_six_modules_sized_as_micro_degrees() {
        let modules = catalog_modules();
        assert_eq!(modules.len(), 6);
        assert!(modules
            .iter()
            .all(|module| (9..=15).contains(&module.credits)));
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let names = search_modules("  ")
            .into_iter()
            .map(|module| module.name)
            .collect::<Vec<_>>();
        assert_eq!(names.len(), 6);
        assert_eq!(names[0], "AI Convergence Business MD");
        assert_eq!(names[5], "UX/UI Design MD");
    }

    #[test]
    fn search_matches_names_case_insensitively() {
        let names = search_modules("MARKETING")
            .into_iter()
            .map(|module| module.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Digital Marketing MD"]);
    }

    #[test]
    fn search_matches_departments() {
        let names = search_modules("industrial")
            .into_iter()
            .map(|module| module.name)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Big Data Analytics Fundamentals MD",
                "Smart Factory Operations MD"
            ]
        );
    }

    #[test]
    fn search_without_matches_is_empty() {
        assert!(search_modules("astrophysics").is_empty());
    }

    #[test]
    fn find_module_ignores_case_and_padding() {
        let module = find_module("  digital marketing md ").expect("module should exist");
        assert_eq!(module.credits, 15);
        assert_eq!(
            find_module("ai convergence business md")
                .map(|module| module.department_label())
                .as_deref(),
            Some("Business Administration + Computer Science")
        );
        assert!(find_module("Digital Marketing").is_none());
    }
}
