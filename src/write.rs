use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use crate::util::{fmt_num, fmt_points};
use crate::{
    validate, Object, ObjectGroup, ObjectShape, Properties, Tile, Tileset, TilesetError,
    WangColor, WangSet, WriterConfig,
};

/// Writes a [`Tileset`] as a Tiled tsx document.
#[derive(Clone, Default, Debug)]
pub struct TsxWriter {
    config: WriterConfig,
}

impl TsxWriter {

    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn write<W: Write>(&self, tileset: &Tileset, out: W) -> Result<(), TilesetError> {
        if self.config.validate {
            validate(tileset)?;
        }
        else {
            log::warn!("Writing tileset '{}' without validation", tileset.name);
        }
        log::debug!("Writing tileset '{}' with {} tile entries", tileset.name, tileset.tiles.len());

        let xml = match self.config.indent {
            0 => Writer::new(out),
            indent => Writer::new_with_indent(out, b' ', indent),
        };
        let mut emitter = Emitter { xml, config: &self.config };
        emitter.document(tileset)?;

        let mut out = emitter.xml.into_inner();
        if self.config.trailing_newline {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn to_string(&self, tileset: &Tileset) -> Result<String, TilesetError> {
        let mut bytes = Vec::new();
        self.write(tileset, &mut bytes)?;
        let string = String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(string)
    }

    pub fn write_file(&self, tileset: &Tileset, path: impl AsRef<Path>) -> Result<(), TilesetError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write(tileset, BufWriter::new(file))?;
        log::info!("Wrote tileset '{}' to {}", tileset.name, path.display());
        Ok(())
    }
}

struct Emitter<'a, W: Write> {
    xml: Writer<W>,
    config: &'a WriterConfig,
}

impl<'a, W: Write> Emitter<'a, W> {

    fn document(&mut self, tileset: &Tileset) -> Result<(), TilesetError> {
        if self.config.xml_declaration {
            self.xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        let mut root = BytesStart::new("tileset");
        attr(&mut root, "version", &self.config.version);
        attr(&mut root, "tiledversion", &self.config.tiled_version);
        attr(&mut root, "name", &tileset.name);
        attr_nonempty(&mut root, "class", &tileset.class);
        attr(&mut root, "tilewidth", tileset.tile_width);
        attr(&mut root, "tileheight", tileset.tile_height);
        if tileset.spacing != 0 {
            attr(&mut root, "spacing", tileset.spacing);
        }
        if tileset.margin != 0 {
            attr(&mut root, "margin", tileset.margin);
        }
        attr(&mut root, "tilecount", tileset.tile_count);
        attr(&mut root, "columns", tileset.columns);
        self.xml.write_event(Event::Start(root))?;

        if let Some(offset) = tileset.tile_offset {
            let mut elem = BytesStart::new("tileoffset");
            attr(&mut elem, "x", offset.x);
            attr(&mut elem, "y", offset.y);
            self.xml.write_event(Event::Empty(elem))?;
        }
        if let Some(grid) = tileset.grid {
            let mut elem = BytesStart::new("grid");
            attr(&mut elem, "orientation", grid.orientation.as_str());
            attr(&mut elem, "width", grid.width);
            attr(&mut elem, "height", grid.height);
            self.xml.write_event(Event::Empty(elem))?;
        }
        self.properties(&tileset.properties)?;
        if let Some(image) = &tileset.image {
            let mut elem = BytesStart::new("image");
            attr(&mut elem, "source", &image.source);
            if let Some(trans) = image.trans {
                // Tiled writes the transparent color without its '#'
                let trans = trans.to_string();
                attr(&mut elem, "trans", trans.trim_start_matches('#'));
            }
            if let Some(width) = image.width {
                attr(&mut elem, "width", width);
            }
            if let Some(height) = image.height {
                attr(&mut elem, "height", height);
            }
            self.xml.write_event(Event::Empty(elem))?;
        }

        for tile in tileset.sorted_tiles() {
            log::trace!("Writing tile {}", tile.id);
            self.tile(tile)?;
        }

        if !tileset.wang_sets.is_empty() {
            self.xml.write_event(Event::Start(BytesStart::new("wangsets")))?;
            for wang_set in &tileset.wang_sets {
                self.wang_set(wang_set)?;
            }
            self.xml.write_event(Event::End(BytesEnd::new("wangsets")))?;
        }

        self.xml.write_event(Event::End(BytesEnd::new("tileset")))?;
        Ok(())
    }

    fn properties(&mut self, properties: &Properties) -> Result<(), TilesetError> {
        if properties.is_empty() {
            return Ok(());
        }
        self.xml.write_event(Event::Start(BytesStart::new("properties")))?;
        for (name, value) in properties.iter() {
            let mut elem = BytesStart::new("property");
            attr(&mut elem, "name", name);
            if let Some(type_name) = value.type_name() {
                attr(&mut elem, "type", type_name);
            }
            attr(&mut elem, "value", value.to_attribute());
            self.xml.write_event(Event::Empty(elem))?;
        }
        self.xml.write_event(Event::End(BytesEnd::new("properties")))?;
        Ok(())
    }

    fn tile(&mut self, tile: &Tile) -> Result<(), TilesetError> {
        let mut elem = BytesStart::new("tile");
        attr(&mut elem, "id", tile.id);
        attr_nonempty(&mut elem, "type", &tile.class);
        if let Some(probability) = tile.probability {
            attr(&mut elem, "probability", fmt_num(probability));
        }
        if tile.is_bare() {
            self.xml.write_event(Event::Empty(elem))?;
            return Ok(());
        }

        self.xml.write_event(Event::Start(elem))?;
        self.properties(&tile.properties)?;
        if let Some(group) = &tile.object_group {
            self.object_group(group)?;
        }
        self.xml.write_event(Event::End(BytesEnd::new("tile")))?;
        Ok(())
    }

    fn object_group(&mut self, group: &ObjectGroup) -> Result<(), TilesetError> {
        let mut elem = BytesStart::new("objectgroup");
        attr(&mut elem, "draworder", group.draw_order.as_str());
        attr(&mut elem, "id", group.id);
        if group.objects.is_empty() {
            self.xml.write_event(Event::Empty(elem))?;
            return Ok(());
        }
        self.xml.write_event(Event::Start(elem))?;
        for object in &group.objects {
            self.object(object)?;
        }
        self.xml.write_event(Event::End(BytesEnd::new("objectgroup")))?;
        Ok(())
    }

    fn object(&mut self, object: &Object) -> Result<(), TilesetError> {
        let mut elem = BytesStart::new("object");
        attr(&mut elem, "id", object.id);
        attr_nonempty(&mut elem, "name", &object.name);
        attr_nonempty(&mut elem, "type", &object.class);
        attr(&mut elem, "x", fmt_num(object.position.x));
        attr(&mut elem, "y", fmt_num(object.position.y));
        if object.size.x != 0.0 {
            attr(&mut elem, "width", fmt_num(object.size.x));
        }
        if object.size.y != 0.0 {
            attr(&mut elem, "height", fmt_num(object.size.y));
        }
        if object.rotation != 0.0 {
            attr(&mut elem, "rotation", fmt_num(object.rotation));
        }
        if !object.visible {
            attr(&mut elem, "visible", "0");
        }

        // Rectangles are the only shape without a marker element
        if object.shape == ObjectShape::Rectangle && object.properties.is_empty() {
            self.xml.write_event(Event::Empty(elem))?;
            return Ok(());
        }

        self.xml.write_event(Event::Start(elem))?;
        self.properties(&object.properties)?;
        match &object.shape {
            ObjectShape::Rectangle => {},
            ObjectShape::Ellipse => self.marker("ellipse")?,
            ObjectShape::Point => self.marker("point")?,
            ObjectShape::Polygon(points) => {
                let mut elem = BytesStart::new("polygon");
                attr(&mut elem, "points", fmt_points(points));
                self.xml.write_event(Event::Empty(elem))?;
            },
            ObjectShape::Polyline(points) => {
                let mut elem = BytesStart::new("polyline");
                attr(&mut elem, "points", fmt_points(points));
                self.xml.write_event(Event::Empty(elem))?;
            },
        }
        self.xml.write_event(Event::End(BytesEnd::new("object")))?;
        Ok(())
    }

    fn marker(&mut self, name: &str) -> Result<(), TilesetError> {
        self.xml.write_event(Event::Empty(BytesStart::new(name)))?;
        Ok(())
    }

    fn wang_set(&mut self, wang_set: &WangSet) -> Result<(), TilesetError> {
        let mut elem = BytesStart::new("wangset");
        attr(&mut elem, "name", &wang_set.name);
        attr_nonempty(&mut elem, "class", &wang_set.class);
        attr(&mut elem, "type", wang_set.kind.as_str());
        attr(&mut elem, "tile", tile_ref(wang_set.tile));
        if wang_set.properties.is_empty() && wang_set.colors.is_empty() && wang_set.tiles.is_empty() {
            self.xml.write_event(Event::Empty(elem))?;
            return Ok(());
        }

        self.xml.write_event(Event::Start(elem))?;
        self.properties(&wang_set.properties)?;
        for color in &wang_set.colors {
            self.wang_color(color)?;
        }
        for wang_tile in &wang_set.tiles {
            let mut elem = BytesStart::new("wangtile");
            attr(&mut elem, "tileid", wang_tile.tile_id);
            attr(&mut elem, "wangid", wang_tile.wang_id_attribute());
            self.xml.write_event(Event::Empty(elem))?;
        }
        self.xml.write_event(Event::End(BytesEnd::new("wangset")))?;
        Ok(())
    }

    fn wang_color(&mut self, color: &WangColor) -> Result<(), TilesetError> {
        let mut elem = BytesStart::new("wangcolor");
        attr(&mut elem, "name", &color.name);
        attr_nonempty(&mut elem, "class", &color.class);
        attr(&mut elem, "color", color.color);
        attr(&mut elem, "tile", tile_ref(color.tile));
        attr(&mut elem, "probability", fmt_num(color.probability));
        if color.properties.is_empty() {
            self.xml.write_event(Event::Empty(elem))?;
            return Ok(());
        }
        self.xml.write_event(Event::Start(elem))?;
        self.properties(&color.properties)?;
        self.xml.write_event(Event::End(BytesEnd::new("wangcolor")))?;
        Ok(())
    }
}

fn attr(elem: &mut BytesStart, name: &str, value: impl ToString) {
    let value = value.to_string();
    elem.push_attribute((name, value.as_str()));
}

fn attr_nonempty(elem: &mut BytesStart, name: &str, value: &str) {
    if !value.is_empty() {
        elem.push_attribute((name, value));
    }
}

/// Tile references use -1 for "none".
fn tile_ref(tile: Option<u32>) -> i64 {
    tile.map(i64::from).unwrap_or(-1)
}
