mod api_error;
mod files;
