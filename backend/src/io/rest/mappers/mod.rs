pub mod usuario_mapper;
