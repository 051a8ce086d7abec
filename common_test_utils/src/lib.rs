use gangway_engine::ModuleReference;

pub mod stub_resolver;

pub fn mr(scope: &str, module: &str) -> ModuleReference {
    ModuleReference::new(scope, module)
}
