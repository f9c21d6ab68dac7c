mod buffer_props;
mod comment_box;
