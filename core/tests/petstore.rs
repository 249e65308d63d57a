use jaxrs_gen_core::settings::ReactiveImplementation;
use jaxrs_gen_core::{write_sources, CodegenInfo, Generator, GeneratorSettings};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture() -> CodegenInfo {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/petstore.yaml");
    CodegenInfo::load(&path).unwrap()
}

fn reactive_settings() -> GeneratorSettings {
    GeneratorSettings {
        reactive: true,
        reactive_implementation: ReactiveImplementation::Mutiny,
        base_package: "org.acme.petstore".into(),
        ..Default::default()
    }
}

#[test]
fn test_generate_petstore_reactive() {
    let settings = reactive_settings();
    let sources = Generator::new(&settings).generate(&fixture()).unwrap();
    assert_eq!(sources.len(), 2);

    let expected_pets = r#"package org.acme.petstore.api;

import io.smallrye.mutiny.Uni;
import jakarta.validation.constraints.Max;
import jakarta.validation.constraints.Min;
import jakarta.validation.constraints.NotNull;
import jakarta.validation.constraints.Size;
import jakarta.ws.rs.Consumes;
import jakarta.ws.rs.CookieParam;
import jakarta.ws.rs.GET;
import jakarta.ws.rs.HeaderParam;
import jakarta.ws.rs.Path;
import jakarta.ws.rs.PathParam;
import jakarta.ws.rs.POST;
import jakarta.ws.rs.Produces;
import jakarta.ws.rs.QueryParam;
import java.io.InputStream;
import java.util.List;
import java.util.UUID;
import org.acme.petstore.Audited;
import org.acme.petstore.beans.Pet;

/**
 * A JAX-RS interface. An implementation of this interface must be provided.
 */
@Path("/api/pets")
public interface Pets {

    /**
     * <p>List all pets.</p>
     * <p>Results are <em>paged</em>.</p>
     */
    @GET
    @Produces({"application/json"})
    Uni<List<Pet>> listPets(@QueryParam("limit") @Min(1) @Max(100) Integer limit, @QueryParam("tag") @NotNull @Size(max = 32) String tag);

    @Path("/{petId}")
    @GET
    @Produces({"application/json"})
    Uni<Pet> getPetById(@PathParam("petId") long petId);

    @POST
    @Consumes({"application/json", "application/xml"})
    void addPet(@NotNull Pet body, @HeaderParam("X-Request-ID") @NotNull @Audited("create") UUID X_Request_ID);

    @Path("/{petId}/image")
    @POST
    @Consumes({"application/octet-stream"})
    Uni<Void> uploadImage(@PathParam("petId") long petId, @NotNull InputStream data, @CookieParam("session") Object session, @NotNull Object file);
}
"#;

    let expected_store = r#"package org.acme.petstore.api;

import io.smallrye.mutiny.Uni;
import jakarta.ws.rs.GET;
import jakarta.ws.rs.Path;
import jakarta.ws.rs.Produces;

/**
 * A JAX-RS interface. An implementation of this interface must be provided.
 */
@Path("/api/store")
public interface Store {

    @Path("/inventory")
    @GET
    @Produces({"application/json"})
    Uni<Void> getInventory();
}
"#;

    assert_eq!(sources[0].relative_path, PathBuf::from("org/acme/petstore/api/Pets.java"));
    assert_eq!(sources[0].content, expected_pets);
    assert_eq!(sources[1].content, expected_store);
}

#[test]
fn test_generate_petstore_sync_with_envelope() {
    let settings = GeneratorSettings {
        return_response: true,
        base_package: "org.acme.petstore".into(),
        ..Default::default()
    };
    let sources = Generator::new(&settings).generate(&fixture()).unwrap();
    let pets = &sources[0].content;

    assert!(pets.contains("    RestResponse<List<Pet>> listPets("));
    assert!(pets.contains("    RestResponse<Pet> getPetById("));
    assert!(pets.contains("    Response addPet("));
    assert!(pets.contains("import jakarta.ws.rs.core.Response;"));
    assert!(pets.contains("import org.jboss.resteasy.reactive.RestResponse;"));
    assert!(!pets.contains("Uni<"));
    assert!(!pets.contains("CompletionStage<"));
}

#[test]
fn test_generation_is_deterministic() {
    let settings = reactive_settings();
    let info = fixture();
    let first = Generator::new(&settings).generate(&info).unwrap();
    let second = Generator::new(&settings).generate(&fixture()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_write_petstore_sources() {
    let settings = reactive_settings();
    let sources = Generator::new(&settings).generate(&fixture()).unwrap();
    let out = tempfile::tempdir().unwrap();

    let written = write_sources(out.path(), &sources).unwrap();
    assert_eq!(written.len(), 2);
    let store = fs::read_to_string(out.path().join("org/acme/petstore/api/Store.java")).unwrap();
    assert!(store.starts_with("package org.acme.petstore.api;\n"));
}

#[test]
fn test_broken_resource_aborts_generation() {
    let settings = reactive_settings();
    let mut info = fixture();
    info.interfaces[1].methods[0].name = "get inventory".into();

    let res = Generator::new(&settings).generate(&info);
    assert!(res.is_err());
    assert!(format!("{}", res.unwrap_err()).contains("Invalid method name"));
}
