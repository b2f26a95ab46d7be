pub mod desk_fixture;
