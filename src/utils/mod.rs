pub mod object_url;
