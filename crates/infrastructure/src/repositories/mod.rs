pub mod yaml_server_list_repository;

pub use yaml_server_list_repository::YamlServerListRepository;
